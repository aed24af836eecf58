//! Core data models for assetgen
//!
//! - `AssetKind`: which encoder handles a file
//! - `SourceAsset`: a file found by the scanner, not yet read
//! - `AssetEntry`: an encoded asset ready for code generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of embeddable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Vector image, embedded as percent-encoded text
    Svg,
    /// Raster image, embedded as base64
    Png,
}

impl AssetKind {
    /// All kinds, in the order they appear in generated output
    pub const ALL: [AssetKind; 2] = [AssetKind::Svg, AssetKind::Png];

    /// Match a file extension exactly (`svg`, `png`)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "svg" => Some(AssetKind::Svg),
            "png" => Some(AssetKind::Png),
            _ => None,
        }
    }

    /// Determine the kind of a path from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Svg => "svg",
            AssetKind::Png => "png",
        }
    }

    /// Prefix of the data URI carrying this kind of payload
    pub fn data_uri_prefix(self) -> &'static str {
        match self {
            AssetKind::Svg => "data:image/svg+xml;charset=utf8,",
            AssetKind::Png => "data:image/png;base64,",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file discovered under the asset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    /// Symbolic name derived from the file stem
    pub name: String,
    pub kind: AssetKind,
    pub path: PathBuf,
}

/// An encoded asset, keyed by name within its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub kind: AssetKind,
    /// Complete data URI (`data:image/...`)
    pub data_uri: String,
    pub source_path: PathBuf,
}

impl AssetEntry {
    pub fn new(
        name: impl Into<String>,
        kind: AssetKind,
        data_uri: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            data_uri: data_uri.into(),
            source_path: source_path.into(),
        }
    }

    /// Payload without the data URI prefix
    pub fn payload(&self) -> &str {
        self.data_uri
            .strip_prefix(self.kind.data_uri_prefix())
            .unwrap_or(&self.data_uri)
    }
}
