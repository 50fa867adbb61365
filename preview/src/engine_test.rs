#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MAX_ZOOM, MIN_ZOOM};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn panned(core: &mut PreviewCore, from: Point, to: Point) {
    core.on_pointer_down(from, Button::Primary);
    core.on_pointer_move(to);
    core.on_frame();
    core.on_pointer_up();
}

// =============================================================
// Zoom controls
// =============================================================

#[test]
fn zoom_in_reports_new_viewport() {
    let mut core = PreviewCore::new();
    let actions = core.zoom_in();
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], Action::TransformChanged(vp) if vp.zoom == 1.2));
}

#[test]
fn zoom_at_bounds_is_a_no_op() {
    let mut core = PreviewCore::new();
    for _ in 0..20 {
        core.zoom_in();
    }
    assert_eq!(core.viewport().zoom, MAX_ZOOM);
    assert!(core.zoom_in().is_empty());
    for _ in 0..20 {
        core.zoom_out();
    }
    assert_eq!(core.viewport().zoom, MIN_ZOOM);
    assert!(core.zoom_out().is_empty());
}

#[test]
fn zoom_keeps_pan() {
    let mut core = PreviewCore::new();
    panned(&mut core, pt(0.0, 0.0), pt(10.0, 5.0));
    core.zoom_in();
    assert_eq!(core.viewport().pan, pt(10.0, 5.0));
}

#[test]
fn reset_restores_identity() {
    let mut core = PreviewCore::new();
    core.zoom_in();
    panned(&mut core, pt(0.0, 0.0), pt(40.0, -20.0));
    let actions = core.reset();
    assert_eq!(core.viewport(), Viewport::default());
    assert_eq!(actions, vec![Action::TransformChanged(Viewport::default())]);
}

#[test]
fn reset_mid_pan_clears_gesture_baseline() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(50.0, 50.0));
    let actions = core.reset();
    assert!(!core.is_panning());
    assert!(actions.contains(&Action::SetCursor(CURSOR_GRAB)));
    // The outstanding frame must not resurrect the old offset.
    core.on_frame();
    assert_eq!(core.viewport(), Viewport::default());
    // Further moves are ignored until the next press.
    assert!(core.on_pointer_move(pt(80.0, 80.0)).is_empty());
}

// =============================================================
// Pan gesture
// =============================================================

#[test]
fn primary_press_starts_pan() {
    let mut core = PreviewCore::new();
    let actions = core.on_pointer_down(pt(5.0, 5.0), Button::Primary);
    assert!(core.is_panning());
    assert_eq!(core.cursor(), CURSOR_GRABBING);
    assert_eq!(actions, vec![Action::SetCursor(CURSOR_GRABBING)]);
}

#[test]
fn other_buttons_are_ignored() {
    let mut core = PreviewCore::new();
    for button in [Button::Middle, Button::Secondary, Button::Other] {
        assert!(core.on_pointer_down(pt(5.0, 5.0), button).is_empty());
        assert!(!core.is_panning());
    }
    assert_eq!(core.cursor(), CURSOR_GRAB);
}

#[test]
fn move_without_press_does_nothing() {
    let mut core = PreviewCore::new();
    assert!(core.on_pointer_move(pt(30.0, 30.0)).is_empty());
    assert!(!core.frame_pending());
}

#[test]
fn moves_accumulate_deltas_since_last_position() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(110.0, 95.0));
    core.on_pointer_move(pt(130.0, 90.0));
    core.on_frame();
    assert_eq!(core.viewport().pan, pt(30.0, -10.0));
}

#[test]
fn second_pan_starts_from_current_offset() {
    let mut core = PreviewCore::new();
    panned(&mut core, pt(0.0, 0.0), pt(20.0, 10.0));
    panned(&mut core, pt(500.0, 500.0), pt(505.0, 490.0));
    assert_eq!(core.viewport().pan, pt(25.0, 0.0));
}

#[test]
fn release_commits_and_restores_cursor() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(7.0, 3.0));
    let actions = core.on_pointer_up();
    let moved = Viewport { pan: pt(7.0, 3.0), ..Viewport::default() };
    assert_eq!(actions, vec![Action::TransformChanged(moved), Action::SetCursor(CURSOR_GRAB)]);
    assert!(!core.is_panning());
}

#[test]
fn leave_stops_tracking() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_leave();
    assert!(!core.is_panning());
    assert!(core.on_pointer_move(pt(50.0, 50.0)).is_empty());
}

#[test]
fn leaving_mid_pan_keeps_offset_and_ignores_outside_moves() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(12.0, -4.0));
    let actions = core.on_pointer_leave();
    let moved = Viewport { pan: pt(12.0, -4.0), ..Viewport::default() };
    assert_eq!(actions, vec![Action::TransformChanged(moved), Action::SetCursor(CURSOR_GRAB)]);

    assert!(core.on_pointer_move(pt(300.0, 300.0)).is_empty());
    assert!(core.on_pointer_up().is_empty());
    assert_eq!(core.viewport(), moved);
}

#[test]
fn release_when_idle_is_silent() {
    let mut core = PreviewCore::new();
    assert!(core.on_pointer_up().is_empty());
    assert!(core.on_pointer_leave().is_empty());
}

// =============================================================
// Frame throttling
// =============================================================

#[test]
fn only_one_frame_outstanding() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    assert_eq!(core.on_pointer_move(pt(1.0, 0.0)), vec![Action::FrameNeeded]);
    assert!(core.on_pointer_move(pt(2.0, 0.0)).is_empty());
    assert!(core.on_pointer_move(pt(3.0, 0.0)).is_empty());
    assert!(core.frame_pending());
    // Nothing is shown until the frame fires.
    assert_eq!(core.viewport().pan, pt(0.0, 0.0));
}

#[test]
fn frame_commits_running_offset_and_rearms() {
    let mut core = PreviewCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(4.0, 2.0));
    let actions = core.on_frame();
    assert_eq!(actions, vec![Action::TransformChanged(Viewport { pan: pt(4.0, 2.0), ..Viewport::default() })]);
    assert!(!core.frame_pending());
    assert_eq!(core.on_pointer_move(pt(6.0, 2.0)), vec![Action::FrameNeeded]);
}

#[test]
fn frame_without_changes_emits_nothing() {
    let mut core = PreviewCore::new();
    assert!(core.on_frame().is_empty());
}

#[test]
fn transform_css_reflects_committed_state() {
    let mut core = PreviewCore::new();
    core.zoom_in();
    panned(&mut core, pt(0.0, 0.0), pt(12.0, -4.0));
    assert_eq!(core.transform_css(), "translate(12px, -4px) scale(1.2)");
}
