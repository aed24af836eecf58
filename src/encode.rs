//! Asset encoding pipeline
//!
//! scan → collect → render → write. The whole module is regenerated on
//! every run; nothing is merged with the previous file.

use std::fs;
use std::path::PathBuf;

use similar::TextDiff;

use crate::codegen::{render_typescript, CodegenOptions};
use crate::encoding::SvgEncoding;
use crate::error::AssetgenResult;
use crate::models::AssetKind;
use crate::registry::AssetRegistry;
use crate::scanner::scan_assets;
use crate::writer::{hash_content, write_if_changed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Asset root scanned recursively
    pub source: PathBuf,
    /// Generated module path
    pub output: PathBuf,
    pub svg_encoding: SvgEncoding,
    pub codegen: CodegenOptions,
}

#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub output: PathBuf,
    pub svg_count: usize,
    pub png_count: usize,
    /// `false` when the file on disk already had this content
    pub written: bool,
    pub hash: String,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub output: PathBuf,
    pub up_to_date: bool,
    /// Unified diff from the file on disk to the expected content
    pub diff: Option<String>,
}

/// Scan, encode and render without touching the output file
pub fn generate(options: &EncodeOptions) -> AssetgenResult<(AssetRegistry, String)> {
    let sources = scan_assets(&options.source)?;
    let registry = AssetRegistry::collect(&sources, options.svg_encoding)?;
    let content = render_typescript(&registry, &options.codegen);
    Ok((registry, content))
}

/// Regenerate the asset module
pub fn encode_assets(options: &EncodeOptions) -> AssetgenResult<EncodeReport> {
    let (registry, content) = generate(options)?;

    let written = write_if_changed(&options.output, content.as_bytes())?;
    if written {
        log::info!("wrote {}", options.output.display());
    } else {
        log::info!("{} is up to date", options.output.display());
    }

    Ok(EncodeReport {
        output: options.output.clone(),
        svg_count: registry.count(AssetKind::Svg),
        png_count: registry.count(AssetKind::Png),
        written,
        hash: hash_content(content.as_bytes()),
    })
}

/// Compare the asset module on disk with what would be generated
///
/// A missing or non-UTF-8 output file counts as stale.
pub fn check_assets(options: &EncodeOptions) -> AssetgenResult<CheckReport> {
    let (_, expected) = generate(options)?;
    let existing = match fs::read(&options.output) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if existing == expected.as_bytes() {
        return Ok(CheckReport {
            output: options.output.clone(),
            up_to_date: true,
            diff: None,
        });
    }

    let path = options.output.display().to_string();
    let existing = String::from_utf8_lossy(&existing);
    let diff = TextDiff::from_lines(&*existing, expected.as_str())
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string();

    Ok(CheckReport {
        output: options.output.clone(),
        up_to_date: false,
        diff: Some(diff),
    })
}
