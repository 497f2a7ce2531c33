use super::*;

#[test]
fn stored_values_round_trip() {
    assert_eq!(parse_stored(stored_value(true)), Some(true));
    assert_eq!(parse_stored(stored_value(false)), Some(false));
}

#[test]
fn unknown_stored_value_is_unset() {
    assert_eq!(parse_stored("true"), None);
    assert_eq!(parse_stored(""), None);
}

#[test]
fn missing_preference_starts_light() {
    assert!(!preference_from(None));
    assert!(!preference_from(Some("system")));
    assert!(!preference_from(Some("light")));
    assert!(preference_from(Some("dark")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
