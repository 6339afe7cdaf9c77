//! Property tests for the package renderer.

use proptest::prelude::*;

use chrono::NaiveDate;
use faltex::domain::services::{render_package, PackageMeta};
use faltex::domain::value_objects::FontRoleTable;
use faltex::{GenerationStamp, IconEntry, IconManifest, IconStyle};

fn meta() -> PackageMeta {
    let stamp = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(GenerationStamp::at)
        .unwrap();
    PackageMeta::new("6.5.0", "6", stamp)
}

fn icon_spec() -> impl Strategy<Value = (bool, bool, bool, Option<String>)> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[0-9a-f]{4}"),
    )
}

fn manifest_from(specs: &[(bool, bool, bool, Option<String>)]) -> IconManifest {
    let entries = specs
        .iter()
        .enumerate()
        .map(|(i, (brands, regular, solid, unicode))| {
            let mut styles = Vec::new();
            if *brands {
                styles.push("brands");
            }
            if *regular {
                styles.push("regular");
            }
            if *solid {
                styles.push("solid");
            }
            IconEntry::new(format!("icon{}", i), styles, unicode.clone())
        })
        .collect();
    IconManifest::new(entries)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every (style, icon) pair with a code-point yields exactly one
    /// macro carrying the uppercased hex; pairs without one yield none.
    #[test]
    fn property_one_macro_per_style_and_icon(
        specs in proptest::collection::vec(icon_spec(), 0..24),
    ) {
        let manifest = manifest_from(&specs);
        let rendered = render_package(&meta(), &[], &FontRoleTable::default(), &manifest);

        let mut expected = 0;
        for (i, (brands, regular, solid, unicode)) in specs.iter().enumerate() {
            let flags = [(IconStyle::Brands, *brands), (IconStyle::Regular, *regular), (IconStyle::Solid, *solid)];
            for (style, enabled) in flags {
                let needle = format!("\\csname {}icon{}\\endcsname ", style.symbol_prefix(), i);
                let hits = rendered.content.matches(&needle).count();
                match unicode {
                    Some(hex) if enabled => {
                        expected += 1;
                        prop_assert_eq!(hits, 1);
                        let line = format!("{}{{\\symbol{{\"{}}}}}", needle, hex.to_uppercase());
                        prop_assert!(rendered.content.contains(&line));
                    }
                    _ => prop_assert_eq!(hits, 0),
                }
            }
        }
        prop_assert_eq!(rendered.icon_count, expected);
    }

    /// PROPERTY: Rendering with a fixed stamp is deterministic.
    #[test]
    fn property_rendering_is_deterministic(
        specs in proptest::collection::vec(icon_spec(), 0..12),
    ) {
        let manifest = manifest_from(&specs);
        let first = render_package(&meta(), &[], &FontRoleTable::default(), &manifest);
        let second = render_package(&meta(), &[], &FontRoleTable::default(), &manifest);
        prop_assert_eq!(first, second);
    }
}
