//! Export planning: file naming, vector payloads, and raster sizing.
//!
//! DESIGN
//! ======
//! The browser does the actual work (serializing the live `<svg>` element,
//! decoding it into an image, drawing onto a canvas, triggering a download).
//! Everything that can be decided without a DOM lives here so the sizing
//! rules are testable natively:
//!
//! - source dimensions come from the `viewBox` per axis when positive, else
//!   from the element's rendered bounding box;
//! - the raster scale is picked from a tier table on the larger side, so
//!   small diagrams get sharper output and huge ones stay a sane file size;
//! - the markup handed to the image decoder always declares absolute
//!   `width`/`height`.
//!
//! ERROR HANDLING
//! ==============
//! [`ExportError`] separates "the image never loaded" from "the canvas could
//! not be encoded" because the fixes differ: the first points at the markup,
//! the second at the browser.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::markup::{ViewBox, ensure_root_dimensions, root_view_box};

/// Filename used when the diagram has no name.
pub const FALLBACK_FILENAME: &str = "mermaid-diagram";

/// Quality argument passed to the canvas encoder.
pub const PNG_QUALITY: f64 = 0.95;

/// Canvas fill drawn beneath the diagram.
pub const RASTER_BACKGROUND: &str = "white";

/// Upper bound of each scale tier on the larger side, with its factor.
/// Anything larger than the last bound uses [`LARGE_DIAGRAM_SCALE`].
pub const SCALE_TIERS: [(f64, f64); 4] = [(300.0, 4.0), (600.0, 3.0), (1000.0, 2.5), (1500.0, 2.0)];

/// Scale for diagrams beyond every tier.
pub const LARGE_DIAGRAM_SCALE: f64 = 1.5;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Svg,
    Png,
}

impl ExportKind {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }

    /// Label shown in the export menu and success notification.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Png => "PNG",
        }
    }
}

/// Why an export failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The serialized markup could not be decoded as an image.
    #[error("Failed to load SVG")]
    SourceLoad,
    /// The canvas could not be created, drawn, or encoded.
    #[error("Failed to generate PNG")]
    Encode,
    /// There is no rendered diagram to export.
    #[error("No diagram found to export")]
    MissingElement,
    /// A browser call failed outside the load/encode steps.
    #[error("Export failed: {0}")]
    Browser(String),
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn max_side(self) -> f64 {
        self.width.max(self.height)
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }
}

/// Size of the exported source: each `viewBox` axis when positive, otherwise
/// the matching side of the rendered bounding box.
#[must_use]
pub fn source_dimensions(view_box: Option<ViewBox>, bounding: Dimensions) -> Dimensions {
    let pick = |from_view_box: Option<f64>, fallback: f64| match from_view_box {
        Some(side) if side > 0.0 && side.is_finite() => side,
        _ => fallback,
    };
    Dimensions {
        width: pick(view_box.map(|vb| vb.width), bounding.width),
        height: pick(view_box.map(|vb| vb.height), bounding.height),
    }
}

/// Raster scale for a diagram whose larger side is `max_side` pixels.
#[must_use]
pub fn scale_factor(max_side: f64) -> f64 {
    SCALE_TIERS
        .iter()
        .find(|(bound, _)| max_side <= *bound)
        .map_or(LARGE_DIAGRAM_SCALE, |(_, scale)| *scale)
}

/// Everything the browser needs to rasterize one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterPlan {
    /// Intrinsic size of the diagram.
    pub source: Dimensions,
    pub scale: f64,
    /// Canvas size in device pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Markup with absolute `width`/`height` on the root element.
    pub markup: String,
}

impl RasterPlan {
    /// Build a plan from serialized markup and the element's bounding box.
    pub fn new(markup: &str, bounding: Dimensions) -> Result<Self, ExportError> {
        let source = source_dimensions(root_view_box(markup), bounding);
        if !(source.width > 0.0 && source.height > 0.0) {
            return Err(ExportError::MissingElement);
        }
        let scale = scale_factor(source.max_side());
        let canvas = source.scaled(scale);
        Ok(Self {
            source,
            scale,
            canvas_width: to_pixels(canvas.width),
            canvas_height: to_pixels(canvas.height),
            markup: ensure_root_dimensions(markup, source.width, source.height),
        })
    }

    /// `data:` URL the image element loads.
    #[must_use]
    pub fn data_url(&self) -> String {
        svg_data_url(&self.markup)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(length: f64) -> u32 {
    length.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Base64 `data:` URL for SVG markup.
#[must_use]
pub fn svg_data_url(markup: &str) -> String {
    format!("data:{};base64,{}", ExportKind::Svg.mime_type(), STANDARD.encode(markup))
}

/// Base name for a download: the trimmed diagram name, or
/// [`FALLBACK_FILENAME`] when blank.
#[must_use]
pub fn safe_filename(diagram_name: &str) -> String {
    let trimmed = diagram_name.trim();
    if trimmed.is_empty() { FALLBACK_FILENAME.to_owned() } else { trimmed.to_owned() }
}

/// Full download name, e.g. `Flow.png`.
#[must_use]
pub fn download_name(diagram_name: &str, kind: ExportKind) -> String {
    format!("{}.{}", safe_filename(diagram_name), kind.extension())
}
