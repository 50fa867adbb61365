//! Render pipeline: source cleanup, engine invocation, markup post-processing.
//!
//! DESIGN
//! ======
//! The rendering engine is an external collaborator behind [`RenderEngine`].
//! The pipeline tolerates small formatting slips before handing text over
//! (trailing whitespace, odd indentation, CRLF line endings, long blank
//! runs) and records each correction as an [`Issue`], so a syntax error
//! message can tell the user whether auto-correction was involved.
//!
//! ERROR HANDLING
//! ==============
//! Engine failures never escape as panics or `Err`: they become
//! [`RenderOutput::Error`] with a user-facing message. The engine's own
//! message is kept in [`RenderError::detail`] for logging.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use async_trait::async_trait;

use crate::markup::append_root_style;

/// Style declarations added to the root `<svg>` for crisper lines and text.
pub const QUALITY_HINTS: &str = "shape-rendering: geometricPrecision; text-rendering: optimizeLegibility;";

/// Indentation unit the engine's block syntax expects.
pub const INDENT_STEP: usize = 4;

/// Prefix of the element id handed to the engine for each render.
pub const RENDER_ID_PREFIX: &str = "mermaid-diagram";

/// Error raised by a [`RenderEngine`], typically a syntax error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The external diagram renderer.
///
/// Futures are not `Send`: the browser engine runs on the single UI thread.
#[async_trait(?Send)]
pub trait RenderEngine {
    /// Render `source` to SVG markup. `id` is unique per call so concurrent
    /// renders never share DOM scratch elements.
    async fn render(&self, id: &str, source: &str) -> Result<String, EngineError>;
}

/// A formatting problem corrected before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    TrailingWhitespace,
    InconsistentIndentation,
}

impl Issue {
    /// Human-readable label used in error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TrailingWhitespace => "Trailing whitespace",
            Self::InconsistentIndentation => "Inconsistent indentation",
        }
    }
}

/// Source text after cleanup, with the corrections that were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub issues: Vec<Issue>,
}

/// Clean up `source` before it reaches the engine.
///
/// Trailing whitespace is trimmed, and leading indentation is expanded
/// (tabs to four spaces) and rounded to the nearest multiple of
/// [`INDENT_STEP`]; both are reported as issues. Lines are split on `\n`
/// before trimming, so a CRLF ending counts as trailing whitespace and is
/// removed with it. Indentation is only examined when more than one line
/// has content. Runs of three or more newlines collapse to two without
/// being reported.
#[must_use]
pub fn normalize(source: &str) -> Normalized {
    let mut issues = Vec::new();

    let mut lines: Vec<String> = source.split('\n').map(str::to_owned).collect();

    if lines.iter().any(|line| line.len() != line.trim_end().len()) {
        issues.push(Issue::TrailingWhitespace);
        for line in &mut lines {
            let trimmed = line.trim_end().len();
            line.truncate(trimmed);
        }
    }

    let content_lines = lines.iter().filter(|line| !line.trim().is_empty()).count();
    if content_lines > 1 {
        let mut reindented = false;
        for line in &mut lines {
            if let Some(fixed) = fix_indentation(line) {
                *line = fixed;
                reindented = true;
            }
        }
        if reindented {
            issues.push(Issue::InconsistentIndentation);
        }
    }

    Normalized { text: collapse_blank_runs(&lines.join("\n")), issues }
}

/// Corrected line, or `None` when its indentation is already fine.
fn fix_indentation(line: &str) -> Option<String> {
    let body = line.trim_start();
    if body.is_empty() {
        return None;
    }
    let lead = &line[..line.len() - body.len()];
    if lead.is_empty() {
        return None;
    }

    let expanded = lead.replace('\t', &" ".repeat(INDENT_STEP));
    let width = expanded.chars().count();
    if width % INDENT_STEP != 0 {
        // Round half up to the nearest step.
        let rounded = (width + INDENT_STEP / 2) / INDENT_STEP * INDENT_STEP;
        return Some(format!("{}{}", " ".repeat(rounded), body.trim_end()));
    }
    if expanded != lead {
        return Some(format!("{expanded}{body}"));
    }
    None
}

fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        out.push(ch);
    }
    out
}

/// Add [`QUALITY_HINTS`] to the root element of rendered markup.
#[must_use]
pub fn inject_quality_hints(svg: &str) -> String {
    append_root_style(svg, QUALITY_HINTS)
}

/// A fresh element id for one engine call.
#[must_use]
pub fn next_render_id() -> String {
    format!("{RENDER_ID_PREFIX}-{}", uuid::Uuid::new_v4().simple())
}

/// User-facing message for a failed render.
#[must_use]
pub fn syntax_error_message(issues: &[Issue]) -> String {
    if issues.is_empty() {
        "Invalid Mermaid syntax. Please check your input.".to_owned()
    } else {
        let labels: Vec<&str> = issues.iter().map(|issue| issue.label()).collect();
        format!("Invalid Mermaid syntax. Detected: {}.", labels.join(", "))
    }
}

/// A failed render, ready to show in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    /// Message for the user.
    pub message: String,
    /// The engine's own error text.
    pub detail: String,
    /// Corrections applied before the failed attempt.
    pub issues: Vec<Issue>,
}

/// Outcome of one render: nothing to show, markup, or an error. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderOutput {
    /// Blank input; the preview shows its placeholder.
    #[default]
    Empty,
    /// Rendered SVG markup with quality hints applied.
    Markup(String),
    /// The engine rejected the source.
    Error(RenderError),
}

impl RenderOutput {
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Markup(svg) => Some(svg),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&RenderError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Cleans up source text and drives a [`RenderEngine`].
#[derive(Debug, Clone)]
pub struct RenderPipeline<E> {
    engine: E,
}

impl<E: RenderEngine> RenderPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    /// Render `source`.
    ///
    /// Blank input returns [`RenderOutput::Empty`] without calling the engine.
    pub async fn render(&self, source: &str) -> RenderOutput {
        if source.trim().is_empty() {
            return RenderOutput::Empty;
        }

        let Normalized { text, issues } = normalize(source);
        if !issues.is_empty() {
            log::debug!("normalized diagram source: {issues:?}");
        }

        let id = next_render_id();
        match self.engine.render(&id, &text).await {
            Ok(svg) => {
                if !issues.is_empty() {
                    let labels: Vec<&str> = issues.iter().map(|issue| issue.label()).collect();
                    log::info!("auto-fixed {} in diagram", labels.join(", "));
                }
                RenderOutput::Markup(inject_quality_hints(&svg))
            }
            Err(err) => {
                log::warn!("diagram render failed: {err}");
                RenderOutput::Error(RenderError { message: syntax_error_message(&issues), detail: err.message, issues })
            }
        }
    }
}
