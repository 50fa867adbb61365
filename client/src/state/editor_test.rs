use time::macros::datetime;

use diagram::render::RenderError;

use super::*;

fn stored(name: &str, content: &str) -> Diagram {
    Diagram { name: name.to_owned(), content: content.to_owned(), last_updated: datetime!(2025-01-01 0:00 UTC) }
}

// =============================================================
// Defaults and lifecycle
// =============================================================

#[test]
fn default_draft_is_sample_diagram() {
    let state = EditorState::default();
    assert_eq!(state.content, DEFAULT_DIAGRAM);
    assert!(state.name.is_empty());
    assert_eq!(state.font_size, DEFAULT_FONT_SIZE);
    assert!(state.render.is_empty());
}

#[test]
fn load_copies_name_and_content() {
    let mut state = EditorState::default();
    state.load(&stored("Flow", "graph LR\n  A --> B"));
    assert_eq!(state.name, "Flow");
    assert_eq!(state.content, "graph LR\n  A --> B");
}

#[test]
fn new_diagram_resets_text_and_name() {
    let mut state = EditorState::default();
    state.load(&stored("Flow", "pie"));
    state.new_diagram();
    assert_eq!(state.content, DEFAULT_DIAGRAM);
    assert!(state.name.is_empty());
}

// =============================================================
// Font size
// =============================================================

#[test]
fn font_size_steps_and_requests_relayout() {
    let mut state = EditorState::default();
    assert!(state.increase_font_size());
    assert_eq!(state.font_size, DEFAULT_FONT_SIZE + 2);
    assert_eq!(state.layout_seq, 1);
    assert!(state.decrease_font_size());
    assert_eq!(state.font_size, DEFAULT_FONT_SIZE);
    assert_eq!(state.layout_seq, 2);
}

#[test]
fn font_size_stops_at_bounds() {
    let mut state = EditorState { font_size: config::MAX_FONT_SIZE, ..EditorState::default() };
    assert!(!state.can_increase_font_size());
    assert!(!state.increase_font_size());
    assert_eq!(state.layout_seq, 0);

    state.font_size = config::MIN_FONT_SIZE;
    assert!(!state.can_decrease_font_size());
    assert!(!state.decrease_font_size());
    assert_eq!(state.font_size, config::MIN_FONT_SIZE);
}

// =============================================================
// Export gating
// =============================================================

#[test]
fn export_disabled_while_error_showing() {
    let mut state = EditorState::default();
    assert!(state.can_export());
    state.render = RenderOutput::Markup("<svg></svg>".to_owned());
    assert!(state.can_export());
    state.render = RenderOutput::Error(RenderError {
        message: "Invalid Mermaid syntax. Please check your input.".to_owned(),
        detail: "Parse error".to_owned(),
        issues: Vec::new(),
    });
    assert!(!state.can_export());
}
