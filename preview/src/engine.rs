//! Preview engine: zoom controls, pan gesture, and frame throttling.
//!
//! DESIGN
//! ======
//! Pointer moves during a pan arrive far faster than the display refreshes.
//! The engine accumulates them into a running offset and asks the host for
//! one animation frame at a time ([`Action::FrameNeeded`]). When the frame
//! fires, [`PreviewCore::on_frame`] commits the running offset to the
//! displayed [`Viewport`]. Release commits immediately so the final pointer
//! position is never lost to a frame that has not fired yet.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{CURSOR_GRAB, CURSOR_GRABBING};
use crate::input::{Button, PanState};
use crate::viewport::{Point, Viewport};

/// Side effects the host carries out after an input handler returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Schedule one animation frame and call [`PreviewCore::on_frame`] in it.
    FrameNeeded,
    /// The displayed viewport changed; restyle the transform surface.
    TransformChanged(Viewport),
    /// Swap the pointer cursor over the preview.
    SetCursor(&'static str),
    /// Tell the code editor widget to recompute its layout.
    RelayoutEditor,
}

/// Zoom/pan state for the preview pane.
#[derive(Debug, Clone, Default)]
pub struct PreviewCore {
    /// What is on screen.
    viewport: Viewport,
    /// Pan offset including moves not yet committed by a frame.
    running_pan: Point,
    input: PanState,
    frame_pending: bool,
}

impl PreviewCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The committed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.input.is_panning()
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Cursor for the current gesture.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.is_panning() { CURSOR_GRABBING } else { CURSOR_GRAB }
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        self.viewport.transform_css()
    }

    // --- Zoom controls ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        if self.viewport.zoom_in() { vec![Action::TransformChanged(self.viewport)] } else { Vec::new() }
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        if self.viewport.zoom_out() { vec![Action::TransformChanged(self.viewport)] } else { Vec::new() }
    }

    /// Zoom 1, no pan, and any gesture in progress forgotten.
    pub fn reset(&mut self) -> Vec<Action> {
        let was_panning = self.is_panning();
        self.viewport.reset();
        self.running_pan = Point::default();
        self.input = PanState::Idle;
        let mut actions = vec![Action::TransformChanged(self.viewport)];
        if was_panning {
            actions.push(Action::SetCursor(CURSOR_GRAB));
        }
        actions
    }

    // --- Pan gesture ---

    /// Primary press starts a pan from the current offset. Other buttons
    /// are ignored.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.running_pan = self.viewport.pan;
        self.input = PanState::Panning { last_screen: screen };
        vec![Action::SetCursor(CURSOR_GRABBING)]
    }

    /// Accumulate the move since the last pointer position. Requests a frame
    /// unless one is already outstanding.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let PanState::Panning { last_screen } = self.input else {
            return Vec::new();
        };
        self.running_pan = self.running_pan.offset_by(screen.delta_from(last_screen));
        self.input = PanState::Panning { last_screen: screen };
        if self.frame_pending {
            return Vec::new();
        }
        self.frame_pending = true;
        vec![Action::FrameNeeded]
    }

    /// Release ends the pan and commits the final offset.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.finish_pan()
    }

    /// Leaving the preview ends the pan the same way release does.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_pan()
    }

    fn finish_pan(&mut self) -> Vec<Action> {
        if !self.is_panning() {
            return Vec::new();
        }
        self.input = PanState::Idle;
        let mut actions = self.commit();
        actions.push(Action::SetCursor(CURSOR_GRAB));
        actions
    }

    // --- Frames ---

    /// Animation frame callback: clears the outstanding request and commits
    /// the running offset.
    pub fn on_frame(&mut self) -> Vec<Action> {
        self.frame_pending = false;
        self.commit()
    }

    fn commit(&mut self) -> Vec<Action> {
        if self.viewport.pan == self.running_pan {
            return Vec::new();
        }
        self.viewport.pan = self.running_pan;
        vec![Action::TransformChanged(self.viewport)]
    }
}
