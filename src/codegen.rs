//! TypeScript module generation
//!
//! [`render_typescript`] turns a registry into the text of the generated
//! asset module. It does no I/O; the encode pipeline decides where the text
//! goes.

use std::ops::Range;

use crate::encoding::{escape_template_literal, escape_ts_string};
use crate::models::{AssetEntry, AssetKind};
use crate::registry::AssetRegistry;

/// SVG keyword replaced by the caller-supplied color in template mode
pub const COLOR_PLACEHOLDER: &str = "currentColor";

const COLOR_INTERPOLATION: &str = "${encodeColor(color)}";

/// `fill` attribute openers as they appear after minimal and full encoding
const FILL_OPENERS: &[(&str, char)] = &[("fill=\"", '"'), ("fill='", '\''), ("fill%3d'", '\'')];

/// Entry point named in the header comment
pub const DEFAULT_GENERATOR: &str = "encode-assets";

/// Default module the `ImageURI` brand is imported from
pub const DEFAULT_IMAGE_URI_IMPORT: &str = "app/src-electron/schema/brands";

/// Options controlling the shape of the generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Name printed in the header comment
    pub generator: String,
    /// Module specifier providing the `ImageURI` type
    pub image_uri_import: String,
    /// Emit SVG entries as `(color?: string) => ImageURI` functions
    pub color_template: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            image_uri_import: DEFAULT_IMAGE_URI_IMPORT.to_string(),
            color_template: true,
        }
    }
}

/// Render the complete generated module
pub fn render_typescript(registry: &AssetRegistry, options: &CodegenOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "// This file is generated by '{}'. Do not edit it by hand.\n",
        options.generator
    ));
    out.push_str("// After adding or changing assets, run the generator again.\n");
    out.push('\n');
    out.push_str(&format!(
        "import {{ ImageURI }} from \"{}\"\n",
        escape_ts_string(&options.image_uri_import)
    ));
    out.push('\n');

    out.push_str(&render_name_union("SvgAssetName", registry, AssetKind::Svg));
    out.push_str(&render_name_union("PngAssetName", registry, AssetKind::Png));
    out.push('\n');

    let svg_values: Vec<(&AssetEntry, String, bool)> = registry
        .entries(AssetKind::Svg)
        .map(|entry| {
            if options.color_template {
                let (value, recolorable) = render_svg_template(entry);
                (entry, value, recolorable)
            } else {
                (entry, render_plain(entry), false)
            }
        })
        .collect();

    if svg_values.iter().any(|(_, _, recolorable)| *recolorable) {
        out.push_str("const encodeColor = (color: string): string => color.replace(/#/g, \"%23\");\n");
        out.push('\n');
    }

    let svg_value_type = if options.color_template {
        "(color?: string) => ImageURI"
    } else {
        "ImageURI"
    };

    out.push_str("interface iAssets {\n");
    out.push_str(&format!("  svg: Record<SvgAssetName, {}>,\n", svg_value_type));
    out.push_str("  png: Record<PngAssetName, ImageURI>,\n");
    out.push_str("}\n");
    out.push('\n');

    out.push_str("export const assets: iAssets = {\n");
    out.push_str("  svg: {\n");
    for (entry, value, _) in &svg_values {
        out.push_str(&format!("    {}: {},\n", render_key(&entry.name), value));
    }
    out.push_str("  },\n");
    out.push_str("  png: {\n");
    for entry in registry.entries(AssetKind::Png) {
        out.push_str(&format!("    {}: {},\n", render_key(&entry.name), render_plain(entry)));
    }
    out.push_str("  },\n");
    out.push_str("}\n");

    out
}

/// `export type X = | "a" | "b";`, or `never` when the kind is empty
fn render_name_union(type_name: &str, registry: &AssetRegistry, kind: AssetKind) -> String {
    if registry.count(kind) == 0 {
        return format!("export type {} = never;\n", type_name);
    }

    let mut out = format!("export type {} =\n", type_name);
    let names: Vec<_> = registry.names(kind).collect();
    for (i, name) in names.iter().enumerate() {
        let terminator = if i + 1 == names.len() { ";" } else { "" };
        out.push_str(&format!("  | \"{}\"{}\n", escape_ts_string(name), terminator));
    }
    out
}

fn render_plain(entry: &AssetEntry) -> String {
    format!("\"{}\" as ImageURI", escape_ts_string(&entry.data_uri))
}

/// Render an SVG entry as a color function
///
/// Returns the value and whether it interpolates the color argument. The
/// parameter defaults to the stored color, so a call without arguments
/// yields exactly the stored data URI.
fn render_svg_template(entry: &AssetEntry) -> (String, bool) {
    let payload = entry.payload();
    let prefix = &entry.data_uri[..entry.data_uri.len() - payload.len()];

    let Some(slot) = color_slot(payload) else {
        let body = escape_template_literal(&entry.data_uri);
        return (format!("(_color?: string) => `{}` as ImageURI", body), false);
    };

    let mut body = escape_template_literal(prefix);
    let mut last = 0;
    for range in &slot.ranges {
        body.push_str(&escape_template_literal(&payload[last..range.start]));
        body.push_str(COLOR_INTERPOLATION);
        last = range.end;
    }
    body.push_str(&escape_template_literal(&payload[last..]));

    let value = format!(
        "(color = \"{}\") => `{}` as ImageURI",
        escape_ts_string(&slot.default),
        body
    );
    (value, true)
}

/// Where the caller-supplied color lands in an encoded SVG payload
#[derive(Debug, PartialEq, Eq)]
struct ColorSlot {
    /// Decoded stored color, used as the parameter default
    default: String,
    /// Payload byte ranges replaced by the interpolation, in order
    ranges: Vec<Range<usize>>,
}

/// `currentColor` wins; otherwise every `fill` attribute carrying the first
/// recolorable fill value.
fn color_slot(payload: &str) -> Option<ColorSlot> {
    let keyword: Vec<_> = payload
        .match_indices(COLOR_PLACEHOLDER)
        .map(|(i, m)| i..i + m.len())
        .collect();
    if !keyword.is_empty() {
        return Some(ColorSlot {
            default: COLOR_PLACEHOLDER.to_string(),
            ranges: keyword,
        });
    }

    let fills = fill_values(payload);
    let chosen = fills
        .iter()
        .map(|range| &payload[range.clone()])
        .find(|value| is_recolorable(value))?;

    let ranges = fills
        .iter()
        .filter(|range| &payload[(*range).clone()] == chosen)
        .cloned()
        .collect();

    Some(ColorSlot {
        default: chosen.replace("%23", "#"),
        ranges,
    })
}

/// Value ranges of every `fill` attribute, sorted by position
fn fill_values(payload: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    for (opener, quote) in FILL_OPENERS {
        for (i, _) in payload.match_indices(opener) {
            let before = &payload[..i];
            if !(before.ends_with(char::is_whitespace) || before.ends_with("%20")) {
                continue;
            }
            let start = i + opener.len();
            if let Some(len) = payload[start..].find(*quote) {
                ranges.push(start..start + len);
            }
        }
    }
    ranges.sort_by_key(|range| range.start);
    ranges
}

/// A raw `#` would not survive `encodeColor` unchanged; `none` and paint
/// server references are not colors.
fn is_recolorable(value: &str) -> bool {
    !value.is_empty() && value != "none" && !value.contains('#') && !value.starts_with("url(")
}

/// Bare key when it is a valid identifier, quoted otherwise
fn render_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", escape_ts_string(name))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
