//! Shared numeric constants for the preview crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the controls allow.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor the controls allow.
pub const MAX_ZOOM: f64 = 3.0;

/// Change per zoom button press.
pub const ZOOM_STEP: f64 = 0.2;

/// Zoom after a reset.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom values snap to this resolution so repeated steps do not drift.
pub const ZOOM_RESOLUTION: f64 = 1000.0;

/// CSS `transform-origin` for the transform surface.
pub const TRANSFORM_ORIGIN: &str = "center center";

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor over the preview while idle.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor while a pan is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

// ── Layout ──────────────────────────────────────────────────────

/// Editor pane width limits, in percent of the viewport.
pub const MIN_SPLIT_PERCENT: f64 = 20.0;
pub const MAX_SPLIT_PERCENT: f64 = 80.0;

/// Editor pane width on first load.
pub const DEFAULT_SPLIT_PERCENT: f64 = 50.0;

/// Viewport width below which panes stack and the splitter is disabled.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
