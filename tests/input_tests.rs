// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn client_to_canvas_subtracts_origin() {
    let p = client_to_canvas(120.0, 80.0, 20.0, 30.0);
    assert_eq!(p, DVec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_keeps_offscreen_samples() {
    // Pointer left of and above the canvas: negative, not clamped
    let p = client_to_canvas(5.0, 5.0, 20.0, 30.0);
    assert_eq!(p, DVec2::new(-15.0, -25.0));
}

#[test]
fn backing_size_truncates_fractional_css() {
    assert_eq!(backing_size(1280.7, 720.2, 1), (1280, 720));
}

#[test]
fn backing_size_guards_degenerate_layouts() {
    assert_eq!(backing_size(0.0, 0.0, 1), (1, 1));
    assert_eq!(backing_size(-40.0, 300.0, 1), (1, 300));
    assert_eq!(backing_size(f64::NAN, f64::INFINITY, 1), (1, 1));
}
