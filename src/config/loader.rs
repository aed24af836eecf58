//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding::SvgEncoding;
use crate::error::{AssetgenError, AssetgenResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "assetgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetgenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> AssetgenResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetgenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit config path, then `assetgen.toml` in `cwd`, then defaults
pub fn discover(cwd: &Path, explicit: Option<&Path>) -> AssetgenResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ASSETGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup
pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ASSETGEN_ASSETS_DIR
    if let Some(dir) = lookup("ASSETGEN_ASSETS_DIR") {
        config.encode.source = PathBuf::from(dir);
    }

    // ASSETGEN_OUTPUT
    if let Some(output) = lookup("ASSETGEN_OUTPUT") {
        config.encode.output = PathBuf::from(output);
    }

    // ASSETGEN_SVG_ENCODING
    if let Some(mode) = lookup("ASSETGEN_SVG_ENCODING") {
        match SvgEncoding::parse(&mode) {
            Some(mode) => config.encode.svg_encoding = mode,
            None => log::warn!("ignoring ASSETGEN_SVG_ENCODING={}: expected minimal or full", mode),
        }
    }

    // ASSETGEN_COLOR_TEMPLATE
    if let Some(val) = lookup("ASSETGEN_COLOR_TEMPLATE") {
        match parse_bool(&val) {
            Some(enabled) => config.encode.color_template = enabled,
            None => log::warn!(
                "ignoring ASSETGEN_COLOR_TEMPLATE={}: expected true, false, 1 or 0",
                val
            ),
        }
    }

    // ASSETGEN_ICONS_DIR
    if let Some(dir) = lookup("ASSETGEN_ICONS_DIR") {
        config.resize.source = PathBuf::from(dir);
    }

    // ASSETGEN_ICONS_DEST
    if let Some(dir) = lookup("ASSETGEN_ICONS_DEST") {
        config.resize.destination = Some(PathBuf::from(dir));
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "encode",
        "source",
        "output",
        "image_uri_import",
        "color_template",
        "svg_encoding",
        "resize",
        "destination",
        "source_size",
        "target_size",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
