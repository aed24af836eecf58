//! Atomic file writer
//!
//! Generated files are written to a temporary file next to the target and
//! renamed into place, so an interrupted run never leaves a half-written
//! module behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::AssetgenResult;

/// Write content to a file atomically
///
/// Uses tempfile + rename. Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> AssetgenResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Write only when the content differs from what is on disk
///
/// Returns `true` when the file was written.
pub fn write_if_changed(path: &Path, content: &[u8]) -> AssetgenResult<bool> {
    if let Ok(existing) = fs::read(path) {
        if existing == content {
            return Ok(false);
        }
    }
    atomic_write(path, content)?;
    Ok(true)
}

/// Compute SHA-256 hash of content, `sha256:`-prefixed
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
