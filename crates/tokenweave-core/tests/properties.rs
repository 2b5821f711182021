//! Property tests for the pipeline's algebraic guarantees.

use proptest::prelude::*;

use tokenweave_core::{coerce_unit, derive_name, reference_name};

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9/ ]{0,10}"
}

fn kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dimension".to_string()),
        Just("number".to_string()),
        Just("fontSizes".to_string()),
        Just("lineHeights".to_string()),
        Just("color".to_string()),
        Just("fontFamilies".to_string()),
    ]
}

proptest! {
    #[test]
    fn derive_name_is_deterministic(path in prop::collection::vec(segment(), 1..5)) {
        prop_assert_eq!(derive_name(&path), derive_name(&path));
    }

    #[test]
    fn derived_names_are_prefixed_and_lowercase(path in prop::collection::vec(segment(), 1..5)) {
        let name = derive_name(&path);
        prop_assert!(name.starts_with("--"));
        prop_assert_eq!(name.to_lowercase(), name);
    }

    #[test]
    fn derived_names_carry_no_whitespace_or_slashes(path in prop::collection::vec(segment(), 1..5)) {
        let name = derive_name(&path);
        prop_assert!(!name.contains(char::is_whitespace));
        prop_assert!(!name.contains('/'));
    }

    // The correctness-critical invariant: a reference spelled with dots
    // and the emission name of the same path are byte-identical.
    #[test]
    fn reference_and_emission_names_agree(path in prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..5)) {
        let reference = path.join(".");
        prop_assert_eq!(reference_name(&reference), derive_name(&path));
    }

    #[test]
    fn unit_coercion_is_idempotent(
        kind in kind(),
        name in prop_oneof![
            Just("--spacing-200".to_string()),
            Just("--typography-fontweight-bold".to_string()),
            Just("--layout-column-count".to_string()),
        ],
        value in prop_oneof![
            "[0-9]{1,4}",
            "[0-9]{1,3}\\.[0-9]{1,2}",
            Just("0".to_string()),
            Just("#1a2b3c".to_string()),
            Just("1.5rem".to_string()),
            Just("100%".to_string()),
            Just("var(--spacing-100)".to_string()),
            Just("auto".to_string()),
        ],
    ) {
        let once = coerce_unit(&kind, &name, &value);
        let twice = coerce_unit(&kind, &name, &once);
        prop_assert_eq!(once, twice);
    }
}
