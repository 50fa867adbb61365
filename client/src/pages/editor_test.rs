use diagram::store::MemoryBackend;
use time::OffsetDateTime;
use time::macros::datetime;

use super::*;

struct FixedClock(OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

fn memory_store() -> DiagramStore<MemoryBackend, FixedClock> {
    DiagramStore::new(MemoryBackend::new(), FixedClock(datetime!(2025-03-01 12:00 UTC)))
}

// =============================================================
// pane_styles
// =============================================================

#[test]
fn side_by_side_splits_width() {
    let styles = pane_styles(Layout::SideBySide { editor_percent: 30.0 });
    assert_eq!(styles.editor, "width: 30%");
    assert_eq!(styles.preview, "width: 70%");
}

#[test]
fn stacked_leaves_sizing_to_css() {
    let styles = pane_styles(Layout::Stacked);
    assert!(styles.editor.is_empty());
    assert!(styles.preview.is_empty());
}

// =============================================================
// save_draft
// =============================================================

#[test]
fn save_draft_stores_name_and_content() {
    let store = memory_store();
    let draft = EditorState { name: "Flow".to_owned(), content: "graph LR\n  A --> B".to_owned(), ..EditorState::default() };
    let saved = save_draft(&store, &draft).unwrap();
    assert_eq!(saved.last_updated, datetime!(2025-03-01 12:00 UTC));
    assert_eq!(store.load_by_name("Flow").unwrap().unwrap().content, "graph LR\n  A --> B");
}

#[test]
fn save_draft_without_name_is_rejected() {
    let store = memory_store();
    let err = save_draft(&store, &EditorState::default()).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
    assert!(store.list().unwrap().is_empty());
}

// =============================================================
// Export messages
// =============================================================

#[test]
fn export_messages_name_format_and_cause() {
    assert_eq!(export_success_message(ExportKind::Png), "PNG exported successfully!");
    assert_eq!(
        export_failure_message(ExportKind::Png, &ExportError::SourceLoad),
        "Failed to export PNG: Failed to load SVG"
    );
    assert_eq!(
        export_failure_message(ExportKind::Svg, &ExportError::MissingElement),
        "Failed to export SVG: No diagram found to export"
    );
}

#[test]
fn missing_diagram_message_quotes_name() {
    assert_eq!(missing_diagram_message("Flow"), "No saved diagram is named \"Flow\".");
}
