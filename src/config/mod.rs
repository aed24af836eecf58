//! Configuration module for assetgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETGEN_*)
//! 3. `assetgen.toml` in the working directory, or `--config PATH`
//! 4. Built-in defaults (lowest priority)
//!
//! Relative paths are resolved against the working directory.

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, EncodeConfig, ResizeConfig};
