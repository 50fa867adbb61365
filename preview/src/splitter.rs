//! Draggable boundary between the editor and preview panes.
//!
//! The position is the editor pane's share of the viewport width, in percent,
//! kept within [`MIN_SPLIT_PERCENT`, `MAX_SPLIT_PERCENT`]. Every applied
//! update asks the host to re-layout the code editor, whose widget does not
//! notice container resizes on its own.

#[cfg(test)]
#[path = "splitter_test.rs"]
mod splitter_test;

use crate::consts::{DEFAULT_SPLIT_PERCENT, MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT, MOBILE_BREAKPOINT_PX};
use crate::engine::Action;
use crate::input::{Button, DragState};

/// How the two panes are arranged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Editor on the left taking `editor_percent` of the width.
    SideBySide { editor_percent: f64 },
    /// Narrow viewport: editor above preview, half each.
    Stacked,
}

/// Whether a viewport this wide uses the side-by-side layout.
#[must_use]
pub fn is_enabled(viewport_width: f64) -> bool {
    viewport_width >= MOBILE_BREAKPOINT_PX
}

/// Clamp a percentage into the splitter bounds.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    percent.clamp(MIN_SPLIT_PERCENT, MAX_SPLIT_PERCENT)
}

#[derive(Debug, Clone)]
pub struct Splitter {
    position: f64,
    state: DragState,
}

impl Default for Splitter {
    fn default() -> Self {
        Self { position: DEFAULT_SPLIT_PERCENT, state: DragState::Idle }
    }
}

impl Splitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor pane width in percent.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pane arrangement for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn layout(&self, viewport_width: f64) -> Layout {
        if is_enabled(viewport_width) {
            Layout::SideBySide { editor_percent: self.position }
        } else {
            Layout::Stacked
        }
    }

    /// Press on the handle. Only the primary button starts a drag, and only
    /// when the splitter is enabled at this width. Returns whether a drag began.
    pub fn on_pointer_down(&mut self, button: Button, viewport_width: f64) -> bool {
        if button != Button::Primary || !is_enabled(viewport_width) {
            return false;
        }
        self.state = DragState::Dragging;
        true
    }

    /// Pointer moved anywhere in the document while dragging.
    pub fn on_pointer_move(&mut self, pointer_x: f64, viewport_width: f64) -> Vec<Action> {
        if !self.is_dragging() {
            return Vec::new();
        }
        if self.drag_to(pointer_x, viewport_width) { vec![Action::RelayoutEditor] } else { Vec::new() }
    }

    /// Release ends the drag.
    pub fn on_pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// Set the position from a pointer at `pointer_x` in a viewport
    /// `viewport_width` wide. A zero, negative, or non-finite width is
    /// ignored. Returns whether the position was applied.
    pub fn drag_to(&mut self, pointer_x: f64, viewport_width: f64) -> bool {
        if !(viewport_width.is_finite() && viewport_width > 0.0 && pointer_x.is_finite()) {
            log::debug!("splitter: ignoring drag in degenerate viewport {viewport_width}");
            return false;
        }
        self.position = clamp_percent(pointer_x * 100.0 / viewport_width);
        true
    }
}
