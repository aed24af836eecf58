//! Error types for assetgen
//!
//! Library code returns `AssetgenResult`; the binaries wrap it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::AssetKind;

/// Result type alias for assetgen operations
pub type AssetgenResult<T> = Result<T, AssetgenError>;

/// Main error type for assetgen operations
#[derive(Error, Debug)]
pub enum AssetgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode or encode failure
    #[error("image error in {file}: {source}")]
    Image {
        file: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Lookup of a name that is not in the registry
    #[error("unknown {kind} asset '{name}'")]
    UnknownAsset { kind: AssetKind, name: String },

    /// Directory walk failure
    #[error("failed to walk asset tree: {0}")]
    Walk(#[from] ignore::Error),
}
