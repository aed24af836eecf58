//! Property tests for SVG payload encoding.

use proptest::prelude::*;

use assetgen::encoding::{encode_svg_minimal, escape_ts_string};
use assetgen::{decode_svg_minimal, encode_svg, SvgEncoding};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: replacing `%23` with `#` restores the source exactly.
    ///
    /// Inputs containing a literal `%23` are excluded; the minimal encoding
    /// does not escape `%`, so those are ambiguous by construction.
    #[test]
    fn property_minimal_round_trips(
        svg in "(?s).{0,256}".prop_filter("no literal %23", |s| !s.contains("%23"))
    ) {
        let encoded = encode_svg_minimal(&svg);
        prop_assert!(!encoded.contains('#'));
        prop_assert_eq!(decode_svg_minimal(&encoded), svg);
    }

    /// PROPERTY: only `#` changes; every other character is left alone.
    #[test]
    fn property_minimal_only_touches_hash(
        svg in "[^#]{0,128}"
    ) {
        prop_assert_eq!(encode_svg(&svg, SvgEncoding::Minimal), svg);
    }

    /// PROPERTY: full encoding leaves no reserved character behind.
    #[test]
    fn property_full_has_no_reserved_chars(
        svg in "(?s).{0,256}"
    ) {
        let encoded = encode_svg(&svg, SvgEncoding::Full);
        for c in "\"#{}<>&|[]^`;?:@=/".chars() {
            prop_assert!(!encoded.contains(c), "found {:?} in {:?}", c, encoded);
        }
        prop_assert!(!encoded.contains("  "));
        prop_assert!(!encoded.contains('\n'));
    }

    /// PROPERTY: a double-quoted literal built from any payload parses back.
    #[test]
    fn property_ts_string_escape_is_lossless(
        s in "[\\x20-\\x7e\\n\\r\\t]{0,128}"
    ) {
        let literal = format!("\"{}\"", escape_ts_string(&s));
        let parsed: String = serde_json::from_str(&literal).unwrap();
        prop_assert_eq!(parsed, s);
    }
}
