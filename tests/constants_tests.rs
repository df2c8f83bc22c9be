// Host-side checks for the page wiring constants.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn dom_names_are_non_empty_and_distinct() {
    let names = [
        TEXT_OVERLAY_ID,
        TUNING_SCRIPT_ID,
        HIDDEN_CLASS,
        MOBILE_CLASS,
        LANDSCAPE_CLASS,
        TIER_ATTRIBUTE,
    ];
    assert!(names.iter().all(|n| !n.is_empty() && !n.contains(' ')));
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn hidden_class_is_a_single_class_token() {
    // overlay visibility is toggled through the class list only
    assert!(!HIDDEN_CLASS.is_empty());
    assert!(HIDDEN_CLASS.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
}

#[test]
fn tier_attribute_is_a_data_attribute() {
    assert!(TIER_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn engine_bridge_methods_differ() {
    assert!(!ENGINE_BRIDGE_GLOBAL.is_empty());
    assert_ne!(ENGINE_APPLY_CONFIG, ENGINE_TRIGGER_EFFECT);
}

#[test]
fn event_lists_have_no_duplicates() {
    let mut all: Vec<&str> = VIEWPORT_EVENTS.to_vec();
    all.extend(BATTERY_EVENTS);
    all.push(TEARDOWN_EVENT);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wake_delay_is_never_negative() {
    assert!(MIN_WAKE_DELAY_MS >= 0.0);
}
