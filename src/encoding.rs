//! Payload encoding and source-level escaping
//!
//! SVG text is percent-encoded so it survives inside a data URI, PNG bytes
//! are base64-encoded. The escaping helpers at the bottom make an encoded
//! payload safe to place inside a generated TypeScript literal.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::AssetKind;

/// Characters percent-encoded by [`SvgEncoding::Full`]
const FULL_ENCODE_SET: &str = "\"%#{}<>&|[]^`;?:@=/ ";

/// How SVG text is made URI-safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SvgEncoding {
    /// Only `#` becomes `%23`; reversible
    #[default]
    Minimal,
    /// Every reserved character is percent-encoded, `"` becomes `'` and
    /// whitespace runs collapse to one space
    Full,
}

impl SvgEncoding {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Some(SvgEncoding::Minimal),
            "full" => Some(SvgEncoding::Full),
            _ => None,
        }
    }
}

/// Encode SVG text with the given mode
pub fn encode_svg(svg: &str, mode: SvgEncoding) -> String {
    match mode {
        SvgEncoding::Minimal => encode_svg_minimal(svg),
        SvgEncoding::Full => encode_svg_full(svg),
    }
}

/// Replace every `#` with `%23`
pub fn encode_svg_minimal(svg: &str) -> String {
    svg.replace('#', "%23")
}

/// Inverse of [`encode_svg_minimal`]
pub fn decode_svg_minimal(encoded: &str) -> String {
    encoded.replace("%23", "#")
}

fn encode_svg_full(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + svg.len() / 4);
    for c in svg.chars() {
        if c == '"' {
            encoded.push('\'');
        } else if FULL_ENCODE_SET.contains(c) {
            encoded.push_str(&format!("%{:x}", c as u32));
        } else {
            encoded.push(c);
        }
    }

    encoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Standard base64 with padding
pub fn encode_png(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn svg_data_uri(payload: &str) -> String {
    format!("{}{}", AssetKind::Svg.data_uri_prefix(), payload)
}

pub fn png_data_uri(payload: &str) -> String {
    format!("{}{}", AssetKind::Png.data_uri_prefix(), payload)
}

/// Escape a string for a double-quoted TypeScript string literal
///
/// Escapes: backslash, double quotes, newlines, carriage returns, tabs
pub fn escape_ts_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escape a string for a TypeScript template literal
///
/// Escapes: backslash, backtick, `${`, newlines, carriage returns. Raw line
/// breaks would be legal but CRLF is normalized to LF when the literal is
/// evaluated, so they are escaped to keep the value exact.
pub fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}
