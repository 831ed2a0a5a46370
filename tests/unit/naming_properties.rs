//! Unit tests for display name derivation.

use dcs_conformance::display_name;
use dcs_conformance::error::RegistryError;
use proptest::prelude::*;

#[test]
fn test_standard_names() {
    assert_eq!(
        display_name("test_Sdash9dot2dashAdot1dashshort").unwrap().as_str(),
        "Standard S-9.2-A.1-short"
    );
    assert_eq!(
        display_name("test_Sdash9dot2dashcab3_28steps_forward").unwrap().as_str(),
        "Standard S-9.2-cab3_28steps_forward"
    );
}

#[test]
fn test_recommended_practice_names() {
    assert_eq!(
        display_name("test_RPdash9dot2dot1").unwrap().as_str(),
        "Recommended Practice RP-9.2.1"
    );
}

#[test]
fn test_missing_prefix() {
    assert!(matches!(
        display_name("Sdash9dot1"),
        Err(RegistryError::InvalidIdentifier(_))
    ));
}

proptest! {
    #[test]
    fn prop_plain_suffix_is_kept(suffix in "[a-c0-9_]{1,20}") {
        let name = display_name(&format!("test_{}", suffix)).unwrap();
        prop_assert_eq!(name.as_str(), suffix.as_str());
    }

    #[test]
    fn prop_encoded_dashes_never_survive(parts in proptest::collection::vec("[0-9]{1,3}", 1..5)) {
        let encoded = parts.join("dash");
        let name = display_name(&format!("test_S{}", encoded)).unwrap();
        prop_assert!(!name.contains("dash"));
        prop_assert_eq!(name.matches('-').count(), parts.len() - 1);
    }
}
