//! Property tests for font renaming and version parsing.

use proptest::prelude::*;

use faltex::domain::entities::normalize_font_name;
use faltex::domain::value_objects::{version_major, version_major_or};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Renaming removes every space and nothing else.
    #[test]
    fn property_rename_strips_only_spaces(name in "[A-Za-z0-9 ._-]{0,48}") {
        let renamed = normalize_font_name(&name);
        let expected: String = name.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(renamed, expected);
    }

    /// PROPERTY: Renaming is idempotent.
    #[test]
    fn property_rename_is_idempotent(name in "[A-Za-z0-9 ._-]{0,48}") {
        let once = normalize_font_name(&name);
        prop_assert_eq!(normalize_font_name(&once), once.clone());
    }

    /// PROPERTY: The major of `<n>.<m>.<p>` (optionally `v`-prefixed) is `n`.
    #[test]
    fn property_major_is_leading_number(
        major in 1u32..100,
        minor in 0u32..100,
        patch in 0u32..100,
        prefix in prop_oneof![Just(""), Just("v")],
    ) {
        let tag = format!("{}{}.{}.{}", prefix, major, minor, patch);
        let expected = major.to_string();
        prop_assert_eq!(version_major(&tag), Some(expected.as_str()));
    }

    /// PROPERTY: Tags without digits fall back.
    #[test]
    fn property_digitless_tag_uses_fallback(tag in "[a-z-]{0,16}") {
        prop_assert_eq!(version_major_or(&tag, "7"), "7");
    }
}
