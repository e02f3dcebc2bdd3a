//! Integration tests for the warning registry.

use strata_common::warning::{has_warned, record_warning, set_quiet, warn_once, warning_count};

#[test]
fn test_warning_is_recorded() {
    set_quiet(true);
    warn_once("test", "recorded once");
    assert!(has_warned("test", "recorded once"));
    assert!(!has_warned("test", "never raised"));
}

#[test]
fn test_same_message_in_other_area_is_distinct() {
    set_quiet(true);
    warn_once("alpha", "shared text");
    assert!(has_warned("alpha", "shared text"));
    assert!(!has_warned("beta", "shared text"));
}

#[test]
fn test_repeated_warning_is_deduplicated() {
    set_quiet(true);
    warn_once("dedup", "only once");
    warn_once("dedup", "only once");
    assert!(!record_warning("dedup", "only once"));
    assert!(has_warned("dedup", "only once"));
}

#[test]
fn test_record_reports_first_sighting_only() {
    assert!(record_warning("first-sighting", "fresh message"));
    assert!(!record_warning("first-sighting", "fresh message"));
    assert!(record_warning("first-sighting", "another message"));
    assert!(warning_count() >= 2);
}
