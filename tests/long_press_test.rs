//! Tests for the long-press download gesture on grid items
//!
//! A press arms an 800ms timer. Holding past the deadline downloads once;
//! releasing or dragging before it cancels. A secondary click downloads
//! immediately whatever the touch state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use katui::logic::gesture::{GestureAction, PressState, LONG_PRESS};
use katui::model::Model;

fn grid_with(paths: &[&str]) -> Model {
    let mut model = Model::new("卡图", false);
    let seq = model.begin_manifest_load();
    model.apply_manifest(seq, Arc::new(paths.iter().map(|p| p.to_string()).collect()), false);
    model.select_top_folder(Some("A".to_string()));
    model
}

#[test]
fn test_hold_past_deadline_downloads_once() {
    let mut model = grid_with(&["r/卡图/A/1.png", "r/卡图/A/2.png"]);
    let t0 = Instant::now();

    model.display.press(1, t0);
    assert_eq!(model.display.press_deadline(), Some(t0 + LONG_PRESS));
    assert_eq!(model.display.tick(t0 + Duration::from_millis(799)), None);
    assert_eq!(model.display.tick(t0 + LONG_PRESS), Some(1));

    // Still held: no second download
    assert_eq!(model.display.tick(t0 + Duration::from_secs(5)), None);
    assert_eq!(model.display.items[1].press.state(), PressState::Fired);

    model.display.press_released();
    assert_eq!(model.display.items[1].press.state(), PressState::Idle);
}

#[test]
fn test_early_release_is_a_tap() {
    let mut model = grid_with(&["r/卡图/A/1.png"]);
    let t0 = Instant::now();

    model.display.press(0, t0);
    model.display.press_released();

    assert!(model.display.press_deadline().is_none());
    assert_eq!(model.display.tick(t0 + LONG_PRESS * 2), None);
    assert_eq!(model.display.selected, Some(0));
}

#[test]
fn test_drag_cancels_pending_press() {
    let mut model = grid_with(&["r/卡图/A/1.png"]);
    let t0 = Instant::now();

    model.display.press(0, t0);
    model.display.press_moved();

    assert_eq!(model.display.tick(t0 + LONG_PRESS), None);
    assert_eq!(model.display.items[0].press.state(), PressState::Idle);
}

#[test]
fn test_rerender_discards_armed_press() {
    let mut model = grid_with(&["r/卡图/A/1.png", "r/卡图/B/2.png"]);
    let t0 = Instant::now();

    model.display.press(0, t0);
    model.set_search_keyword("2".to_string());

    assert_eq!(model.display.tick(t0 + LONG_PRESS), None);
    assert!(model.display.active_press.is_none());
}

#[test]
fn test_context_menu_downloads_and_suppresses_default() {
    let mut model = grid_with(&["r/卡图/A/1.png", "r/卡图/A/2.png"]);

    let outcome = model.display.context_menu(1).expect("item exists");
    assert_eq!(outcome.action, GestureAction::Download);
    assert!(outcome.suppress_default);
    assert_eq!(model.display.selected, Some(1));

    assert!(model.display.context_menu(9).is_none());
}

#[test]
fn test_custom_hold_time() {
    let mut model = Model::with_long_press("卡图", false, Duration::from_millis(200));
    let seq = model.begin_manifest_load();
    model.apply_manifest(seq, Arc::new(vec!["r/卡图/A/1.png".to_string()]), false);
    model.select_top_folder(Some("A".to_string()));

    let t0 = Instant::now();
    model.display.press(0, t0);
    assert_eq!(model.display.tick(t0 + Duration::from_millis(200)), Some(0));
}
