#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_RESOLUTION, ZOOM_STEP};

/// A point or offset in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `earlier` to `self`.
    #[must_use]
    pub fn delta_from(self, earlier: Point) -> Point {
        Point { x: self.x - earlier.x, y: self.y - earlier.y }
    }

    #[must_use]
    pub fn offset_by(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Zoom and pan applied to the rendered diagram.
///
/// `pan` is in CSS pixels, applied before scaling.
/// `zoom` is a scale factor in [`MIN_ZOOM`, `MAX_ZOOM`] (1.0 = actual size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM, pan: Point::default() }
    }
}

fn snap_zoom(zoom: f64) -> f64 {
    ((zoom * ZOOM_RESOLUTION).round() / ZOOM_RESOLUTION).clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Viewport {
    /// Step the zoom up, stopping at [`MAX_ZOOM`]. Returns whether it changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    /// Step the zoom down, stopping at [`MIN_ZOOM`]. Returns whether it changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        let next = snap_zoom(zoom);
        let changed = (next - self.zoom).abs() > f64::EPSILON;
        self.zoom = next;
        changed
    }

    /// Back to actual size with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Zoom as a whole percentage for the controls label.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    /// CSS `transform` value for the transform surface.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan.x, self.pan.y, self.zoom)
    }
}
