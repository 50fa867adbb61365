//! Narrow bridge to the text-editing widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor is a plain `<textarea>` paired with a line-number gutter.
//! Text flows through the reactive `content` field of the editor state; the
//! bridge covers the one imperative operation the rest of the app needs:
//! re-layout after the font size or pane width changes.

#[cfg(test)]
#[path = "editor_bridge_test.rs"]
mod editor_bridge_test;

use leptos::prelude::*;

/// Handles to the textarea and its gutter.
#[derive(Clone, Copy)]
pub struct EditorBridge {
    textarea: NodeRef<leptos::html::Textarea>,
    gutter: NodeRef<leptos::html::Div>,
}

impl EditorBridge {
    pub fn new(textarea: NodeRef<leptos::html::Textarea>, gutter: NodeRef<leptos::html::Div>) -> Self {
        Self { textarea, gutter }
    }

    pub fn textarea(&self) -> NodeRef<leptos::html::Textarea> {
        self.textarea
    }

    pub fn gutter(&self) -> NodeRef<leptos::html::Div> {
        self.gutter
    }

    /// Realign the gutter with the textarea's scroll position.
    pub fn relayout(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let (Some(textarea), Some(gutter)) = (self.textarea.get_untracked(), self.gutter.get_untracked()) {
                gutter.set_scroll_top(textarea.scroll_top());
            }
        }
    }
}

/// Number of lines the gutter must label. An empty buffer still has one.
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// Gutter text: `1` through [`line_count`], one per line.
pub fn gutter_text(content: &str) -> String {
    (1..=line_count(content)).map(|n| n.to_string()).collect::<Vec<_>>().join("\n")
}
