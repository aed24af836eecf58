//! Pixel-art icon upscaling
//!
//! Every `size × size` PNG in the source folder is scaled with a
//! nearest-neighbor filter, so each output pixel copies exactly one source
//! pixel and no blended colors appear.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::{AssetgenError, AssetgenResult};

pub const DEFAULT_SOURCE_SIZE: u32 = 16;
pub const DEFAULT_TARGET_SIZE: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Only icons exactly this wide and tall are processed
    pub source_size: u32,
    pub target_size: u32,
}

impl ResizeOptions {
    /// Options with the default sizes and the sibling `x64` destination
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let destination = sibling_destination(&source, DEFAULT_TARGET_SIZE);
        Self {
            source,
            destination,
            source_size: DEFAULT_SOURCE_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
        }
    }
}

/// `<source>/../x<size>`
pub fn sibling_destination(source: &Path, target_size: u32) -> PathBuf {
    let dir_name = format!("x{}", target_size);
    match source.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

/// Why a file in the source folder produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotPng,
    Dimensions { width: u32, height: u32 },
}

#[derive(Debug, Default)]
pub struct ResizeReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Scale a decoded image to `size × size` with nearest-neighbor sampling
pub fn resize_image(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Nearest)
}

/// Upscale every eligible icon in `options.source`
///
/// A PNG that fails to decode aborts the run.
pub fn resize_icons(options: &ResizeOptions) -> AssetgenResult<ResizeReport> {
    if !options.source.is_dir() {
        return Err(AssetgenError::DirectoryNotFound {
            path: options.source.clone(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&options.source)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut report = ResizeReport::default();
    for path in files {
        if !is_png(&path) {
            log::debug!("skipping {}: not a png", path.display());
            report.skipped.push((path, SkipReason::NotPng));
            continue;
        }

        let img = decode(&path)?;
        let (width, height) = (img.width(), img.height());
        if width != options.source_size || height != options.source_size {
            log::debug!("skipping {}: {}x{}", path.display(), width, height);
            report.skipped.push((path, SkipReason::Dimensions { width, height }));
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        let dest = options.destination.join(file_name);
        fs::create_dir_all(&options.destination)?;

        resize_image(&img, options.target_size)
            .save_with_format(&dest, ImageFormat::Png)
            .map_err(|source| AssetgenError::Image {
                file: dest.clone(),
                source,
            })?;

        log::info!("wrote {}", dest.display());
        report.written.push(dest);
    }

    Ok(report)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

fn decode(path: &Path) -> AssetgenResult<DynamicImage> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| AssetgenError::Image {
            file: path.to_path_buf(),
            source,
        })
}
