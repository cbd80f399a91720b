// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use shapefield_core::ndc_from_css;

#[test]
fn key_action_maps_documented_keys() {
    for k in ["+", "="] {
        assert_eq!(key_action(k), Some(KeyAction::MoreShapes));
    }
    for k in ["-", "_"] {
        assert_eq!(key_action(k), Some(KeyAction::FewerShapes));
    }
    assert_eq!(key_action("o"), Some(KeyAction::ToggleCameraMode));
    assert_eq!(key_action("O"), Some(KeyAction::ToggleCameraMode));
    assert_eq!(key_action("b"), Some(KeyAction::TogglePostProcessing));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleHint));
}

#[test]
fn key_action_ignores_other_keys() {
    for k in ["a", " ", "Enter", "Escape", "ArrowUp", "ArrowLeft", "ArrowRight", "1"] {
        assert_eq!(key_action(k), None, "{k}");
    }
}

#[test]
fn mouse_state_reports_move_deltas() {
    let mut ms = MouseState::default();
    assert_eq!(ms.ndc, None);
    let d = ms.moved_to(Vec2::new(10.0, 20.0), Some(Vec2::new(0.1, 0.2)));
    assert_eq!(d, Vec2::new(10.0, 20.0));
    let d = ms.moved_to(Vec2::new(15.0, 18.0), Some(Vec2::new(0.2, 0.1)));
    assert_eq!(d, Vec2::new(5.0, -2.0));
    assert_eq!(ms.ndc, Some(Vec2::new(0.2, 0.1)));
}

#[test]
fn mouse_leave_clears_pointer_and_button() {
    let mut ms = MouseState {
        down: true,
        ..MouseState::default()
    };
    ms.moved_to(Vec2::new(1.0, 1.0), Some(Vec2::ZERO));
    ms.left();
    assert_eq!(ms.ndc, None);
    assert!(!ms.down);
}

#[test]
fn css_to_ndc_has_y_up() {
    assert_eq!(ndc_from_css(0.0, 0.0, 200.0, 100.0), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(ndc_from_css(200.0, 100.0, 200.0, 100.0), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(ndc_from_css(100.0, 50.0, 200.0, 100.0), Some(Vec2::ZERO));
    assert_eq!(ndc_from_css(-1.0, 50.0, 200.0, 100.0), None);
    assert_eq!(ndc_from_css(10.0, 10.0, 0.0, 100.0), None);
}
