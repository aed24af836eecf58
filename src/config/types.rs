//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codegen::{CodegenOptions, DEFAULT_IMAGE_URI_IMPORT};
use crate::encode::EncodeOptions;
use crate::encoding::SvgEncoding;
use crate::error::AssetgenResult;
use crate::resize::{sibling_destination, ResizeOptions, DEFAULT_SOURCE_SIZE, DEFAULT_TARGET_SIZE};

use super::loader::{self, ConfigWarning};

/// Asset encoder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeConfig {
    #[serde(default = "default_assets_dir")]
    pub source: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_image_uri_import")]
    pub image_uri_import: String,

    #[serde(default = "default_true")]
    pub color_template: bool,

    #[serde(default)]
    pub svg_encoding: SvgEncoding,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            source: default_assets_dir(),
            output: default_output(),
            image_uri_import: default_image_uri_import(),
            color_template: true,
            svg_encoding: SvgEncoding::default(),
        }
    }
}

impl EncodeConfig {
    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            image_uri_import: self.image_uri_import.clone(),
            color_template: self.color_template,
            ..CodegenOptions::default()
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            source: self.source.clone(),
            output: self.output.clone(),
            svg_encoding: self.svg_encoding,
            codegen: self.codegen_options(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("src/assets")
}

fn default_output() -> PathBuf {
    PathBuf::from("src/assets/assets.ts")
}

fn default_image_uri_import() -> String {
    DEFAULT_IMAGE_URI_IMPORT.to_string()
}

/// Icon resizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeConfig {
    #[serde(default = "default_icons_dir")]
    pub source: PathBuf,

    /// Defaults to the sibling `x<target_size>` directory
    #[serde(default)]
    pub destination: Option<PathBuf>,

    #[serde(default = "default_source_size")]
    pub source_size: u32,

    #[serde(default = "default_target_size")]
    pub target_size: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            source: default_icons_dir(),
            destination: None,
            source_size: DEFAULT_SOURCE_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
        }
    }
}

impl ResizeConfig {
    pub fn resize_options(&self) -> ResizeOptions {
        let destination = self
            .destination
            .clone()
            .unwrap_or_else(|| sibling_destination(&self.source, self.target_size));
        ResizeOptions {
            source: self.source.clone(),
            destination,
            source_size: self.source_size,
            target_size: self.target_size,
        }
    }
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("src/assets/icons/x16")
}

fn default_source_size() -> u32 {
    DEFAULT_SOURCE_SIZE
}

fn default_target_size() -> u32 {
    DEFAULT_TARGET_SIZE
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub encode: EncodeConfig,

    #[serde(default)]
    pub resize: ResizeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetgenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve config for a working directory
    ///
    /// An explicit path must exist; otherwise `assetgen.toml` is used when
    /// present. Environment overrides are applied last.
    pub fn discover(
        cwd: &Path,
        explicit: Option<&Path>,
    ) -> AssetgenResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(cwd, explicit)
    }

    /// Apply environment variable overrides (ASSETGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
