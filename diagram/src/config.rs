//! Shared configuration for the editor: UI limits, engine settings, and
//! persistence constants.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// localStorage key holding the JSON array of saved diagrams.
pub const STORAGE_KEY: &str = "mermaid-diagrams";

/// Content loaded into a fresh editor.
pub const DEFAULT_DIAGRAM: &str = "graph TD
    A[Client] --> B[Load Balancer]
    B --> C[Server01]
    B --> D[Server02]";

/// Font stack handed to the rendering engine.
pub const ENGINE_FONT_FAMILY: &str = "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif";

// ── UI limits ───────────────────────────────────────────────────

/// Minimum editor font size in pixels.
pub const MIN_FONT_SIZE: u32 = 10;

/// Maximum editor font size in pixels.
pub const MAX_FONT_SIZE: u32 = 24;

/// Editor font size on first load.
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Increment applied by the font size buttons.
pub const FONT_SIZE_STEP: u32 = 2;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Quiet period after the last keystroke before a render is issued.
pub const DEBOUNCE_DELAY_MS: u32 = 300;

/// Font size after pressing the "smaller" button.
#[must_use]
pub fn decrease_font_size(current: u32) -> u32 {
    current.saturating_sub(FONT_SIZE_STEP).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Font size after pressing the "larger" button.
#[must_use]
pub fn increase_font_size(current: u32) -> u32 {
    current.saturating_add(FONT_SIZE_STEP).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Configuration passed to the external rendering engine's `initialize`.
///
/// Field names serialize in the engine's camelCase convention so the value
/// can be handed over as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub start_on_load: bool,
    pub theme: String,
    pub security_level: String,
    pub font_family: String,
    pub font_size: u32,
    pub theme_variables: ThemeVariables,
}

/// Theme overrides applied on top of the engine's selected theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub font_family: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_on_load: false,
            theme: "default".to_owned(),
            security_level: "loose".to_owned(),
            font_family: ENGINE_FONT_FAMILY.to_owned(),
            font_size: 16,
            theme_variables: ThemeVariables { font_family: ENGINE_FONT_FAMILY.to_owned() },
        }
    }
}
