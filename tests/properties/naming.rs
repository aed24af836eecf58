//! Property tests for symbolic asset names.

use std::path::PathBuf;

use proptest::prelude::*;

use assetgen::symbol_name;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9_ -]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: names never contain `-` and are otherwise the file stem.
    #[test]
    fn property_name_is_stem_with_underscores(
        dirs in proptest::collection::vec("[a-z-]{1,8}", 0..3),
        stem in stem(),
        ext in prop_oneof!["svg", "png"],
    ) {
        let mut path: PathBuf = dirs.iter().collect();
        path.push(format!("{}.{}", stem, ext));

        let name = symbol_name(&path);

        prop_assert!(!name.contains('-'));
        prop_assert_eq!(name.len(), stem.len());
        prop_assert_eq!(name.replace('_', "-"), stem.replace('_', "-"));
    }

    /// PROPERTY: the containing directory never affects the name.
    #[test]
    fn property_name_ignores_directory(
        dir_a in "[a-z]{1,8}",
        dir_b in "[a-z]{1,8}",
        stem in stem(),
    ) {
        let a = PathBuf::from(&dir_a).join(format!("{}.svg", stem));
        let b = PathBuf::from(&dir_b).join("nested").join(format!("{}.svg", stem));
        prop_assert_eq!(symbol_name(&a), symbol_name(&b));
    }
}
