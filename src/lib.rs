//! assetgen - build-time asset pipeline
//!
//! Two independent single-pass tools:
//! - icon upscaling: 16×16 pixel-art PNGs to 64×64 with nearest-neighbor
//!   sampling ([`resize`])
//! - asset module generation: SVG and PNG files under an asset root become
//!   data URIs in one generated TypeScript module ([`encode`])

pub mod codegen;
pub mod commands;
pub mod config;
pub mod encode;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod resize;
pub mod scanner;
pub mod ui;
pub mod writer;

// Re-exports for convenience
pub use codegen::{render_typescript, CodegenOptions};
pub use config::{Config, ConfigWarning};
pub use encode::{check_assets, encode_assets, generate, CheckReport, EncodeOptions, EncodeReport};
pub use encoding::{decode_svg_minimal, encode_png, encode_svg, SvgEncoding};
pub use error::{AssetgenError, AssetgenResult};
pub use models::{AssetEntry, AssetKind, SourceAsset};
pub use registry::AssetRegistry;
pub use resize::{resize_icons, resize_image, ResizeOptions, ResizeReport, SkipReason};
pub use scanner::{scan_assets, symbol_name};
