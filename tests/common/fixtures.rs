//! Test fixtures - reusable asset content.

use image::{Rgba, RgbaImage};

/// SVG with a hex fill color
pub const RED_SVG: &str = r##"<svg fill="#ff0000"/>"##;

/// Multi-line SVG using the recolorable `currentColor` keyword
pub const CURRENT_COLOR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <path fill="currentColor" stroke="#222" d="M0 0h16v16H0z"/>
</svg>
"##;

/// Arbitrary non-image bytes stored under a `.png` name
pub const OPAQUE_PNG_BYTES: &[u8] = &[0x00, 0xff, 0x10, 0x80, 0x7f, b'#', b'%', 0x0a];

/// Four-color pixel-art icon
pub fn pixel_icon(size: u32) -> RgbaImage {
    let palette = [
        Rgba([0, 0, 0, 255]),
        Rgba([255, 255, 255, 255]),
        Rgba([200, 40, 40, 255]),
        Rgba([0, 0, 0, 0]),
    ];
    RgbaImage::from_fn(size, size, |x, y| palette[((x / 2 + y) % 4) as usize])
}
