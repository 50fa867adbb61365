//! Pointer buttons and the gesture states tracked between press and release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Back, forward, or anything else.
    Other,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// Pan gesture over the preview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    /// No gesture in progress; waiting for the next primary press.
    #[default]
    Idle,
    /// The user is dragging the diagram.
    Panning {
        /// Pointer position at the previous event, used to compute the delta.
        last_screen: Point,
    },
}

impl PanState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

/// Splitter drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}
