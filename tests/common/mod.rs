//! Common test utilities for assetgen CLI tests.
//!
//! - `Project`: temp project directory plus helpers to run the binaries
//! - fixtures: reusable SVG/PNG content
//! - `generated_data_uri`: pull one entry back out of a generated module

#![allow(dead_code)]

pub mod fixtures;
pub mod project;

pub use fixtures::*;
pub use project::*;
