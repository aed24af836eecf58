//! Asset tree scanner
//!
//! Finds `.svg` and `.png` files under an asset root, the same set a shell
//! glob `**/*.svg` / `**/*.png` would match.

use std::path::Path;

use ignore::WalkBuilder;

use crate::error::{AssetgenError, AssetgenResult};
use crate::models::{AssetKind, SourceAsset};

/// Derive the symbolic asset name from a file path
///
/// The file stem with every `-` replaced by `_`. Nothing else changes.
pub fn symbol_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace('-', "_"))
        .unwrap_or_default()
}

/// Scan an asset root recursively
///
/// Hidden entries are skipped; ignore files are not consulted. The result is
/// sorted by path so later duplicates are deterministic.
pub fn scan_assets(root: &Path) -> AssetgenResult<Vec<SourceAsset>> {
    if !root.is_dir() {
        return Err(AssetgenError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut assets = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        if let Some(kind) = AssetKind::from_path(path) {
            assets.push(SourceAsset {
                name: symbol_name(path),
                kind,
                path: path.to_path_buf(),
            });
        }
    }

    assets.sort_by(|a, b| a.path.cmp(&b.path));
    log::debug!("found {} assets under {}", assets.len(), root.display());

    Ok(assets)
}
