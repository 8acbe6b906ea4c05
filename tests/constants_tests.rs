// Host-side tests for constants and their relationships with the core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use afterglow_core::ViewMode;
use constants::*;

#[test]
fn default_ids_are_distinct() {
    assert!(!DEFAULT_CANVAS_ID.is_empty());
    assert!(!DEFAULT_SPOTLIGHT_ID.is_empty());
    assert_ne!(DEFAULT_CANVAS_ID, DEFAULT_SPOTLIGHT_ID);
}

#[test]
fn advertised_mode_names_parse() {
    for name in MODE_NAMES {
        let mode: ViewMode = name.parse().expect("known mode name");
        assert_eq!(mode.to_string(), name);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn backing_store_has_a_floor() {
    assert!(MIN_BACKING_PX >= 1);
}
