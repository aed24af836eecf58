//! Asset registry
//!
//! Encoded entries partitioned by kind and keyed by name. Iteration order is
//! the lexicographic order of names, which keeps generated output stable.

use std::collections::BTreeMap;
use std::fs;

use crate::encoding::{encode_png, encode_svg, png_data_uri, svg_data_uri, SvgEncoding};
use crate::error::{AssetgenError, AssetgenResult};
use crate::models::{AssetEntry, AssetKind, SourceAsset};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    svg: BTreeMap<String, AssetEntry>,
    png: BTreeMap<String, AssetEntry>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and encode every source asset
    ///
    /// SVGs are read as UTF-8 text, PNGs as raw bytes. Any read failure
    /// aborts the whole collection.
    pub fn collect(sources: &[SourceAsset], svg_encoding: SvgEncoding) -> AssetgenResult<Self> {
        let mut registry = Self::new();

        for source in sources {
            let data_uri = match source.kind {
                AssetKind::Svg => {
                    let text = fs::read_to_string(&source.path)?;
                    svg_data_uri(&encode_svg(&text, svg_encoding))
                }
                AssetKind::Png => {
                    let bytes = fs::read(&source.path)?;
                    png_data_uri(&encode_png(&bytes))
                }
            };

            registry.insert(AssetEntry::new(
                source.name.clone(),
                source.kind,
                data_uri,
                source.path.clone(),
            ));
        }

        Ok(registry)
    }

    /// Insert an entry, replacing any previous entry with the same name and kind
    pub fn insert(&mut self, entry: AssetEntry) -> Option<AssetEntry> {
        let previous = self.map_mut(entry.kind).insert(entry.name.clone(), entry);
        if let Some(prev) = &previous {
            log::debug!(
                "{} asset '{}' from {} replaced",
                prev.kind,
                prev.name,
                prev.source_path.display()
            );
        }
        previous
    }

    /// Look up an entry, rejecting names that were never collected
    pub fn get(&self, kind: AssetKind, name: &str) -> AssetgenResult<&AssetEntry> {
        self.map(kind)
            .get(name)
            .ok_or_else(|| AssetgenError::UnknownAsset {
                kind,
                name: name.to_string(),
            })
    }

    pub fn names(&self, kind: AssetKind) -> impl Iterator<Item = &str> {
        self.map(kind).keys().map(String::as_str)
    }

    pub fn entries(&self, kind: AssetKind) -> impl Iterator<Item = &AssetEntry> {
        self.map(kind).values()
    }

    pub fn count(&self, kind: AssetKind) -> usize {
        self.map(kind).len()
    }

    pub fn len(&self) -> usize {
        self.svg.len() + self.png.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map(&self, kind: AssetKind) -> &BTreeMap<String, AssetEntry> {
        match kind {
            AssetKind::Svg => &self.svg,
            AssetKind::Png => &self.png,
        }
    }

    fn map_mut(&mut self, kind: AssetKind) -> &mut BTreeMap<String, AssetEntry> {
        match kind {
            AssetKind::Svg => &mut self.svg,
            AssetKind::Png => &mut self.png,
        }
    }
}
