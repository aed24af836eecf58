//! Property tests for nearest-neighbor icon scaling.

use std::collections::HashSet;

use image::{DynamicImage, Rgba, RgbaImage};
use proptest::prelude::*;

use assetgen::resize_image;

fn icon(size: u32) -> impl Strategy<Value = RgbaImage> {
    proptest::collection::vec(any::<[u8; 3]>(), (size * size) as usize).prop_map(move |pixels| {
        RgbaImage::from_fn(size, size, |x, y| {
            let [r, g, b] = pixels[(y * size + x) as usize];
            Rgba([r, g, b, 255])
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every output pixel color already exists in the source.
    #[test]
    fn property_upscale_introduces_no_colors(
        src in icon(16)
    ) {
        let palette: HashSet<Rgba<u8>> = src.pixels().copied().collect();
        let out = resize_image(&DynamicImage::ImageRgba8(src), 64).to_rgba8();

        prop_assert_eq!(out.dimensions(), (64, 64));
        prop_assert!(out.pixels().all(|p| palette.contains(p)));
    }

    /// PROPERTY: a 4x upscale maps each source pixel onto a 4x4 block.
    #[test]
    fn property_upscale_is_blockwise(
        src in icon(16)
    ) {
        let out = resize_image(&DynamicImage::ImageRgba8(src.clone()), 64).to_rgba8();

        for (x, y, pixel) in out.enumerate_pixels() {
            prop_assert_eq!(pixel, src.get_pixel(x / 4, y / 4));
        }
    }
}
