//! Property tests for PNG payload encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;

use assetgen::encode_png;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: base64-decoding the payload returns the exact file bytes.
    #[test]
    fn property_png_payload_is_lossless(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let payload = encode_png(&bytes);
        prop_assert_eq!(STANDARD.decode(&payload).unwrap(), bytes);
    }

    /// PROPERTY: payloads are padded and use only the standard alphabet.
    #[test]
    fn property_png_payload_alphabet(
        bytes in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let payload = encode_png(&bytes);
        prop_assert_eq!(payload.len() % 4, 0);
        prop_assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }
}
