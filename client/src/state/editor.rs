//! Editor draft: the working copy of one diagram and its last render.
//!
//! DESIGN
//! ======
//! The draft is held above the router so it survives navigation to the
//! management view and back. It is never written to storage implicitly;
//! only an explicit save copies it into the store.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use diagram::config::{self, DEFAULT_DIAGRAM, DEFAULT_FONT_SIZE};
use diagram::model::Diagram;
use diagram::render::RenderOutput;

/// Transient editor state provided as `RwSignal<EditorState>`.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub content: String,
    pub name: String,
    pub font_size: u32,
    pub render: RenderOutput,
    /// Bumped whenever the text widget must recompute its layout.
    pub layout_seq: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            content: DEFAULT_DIAGRAM.to_owned(),
            name: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            render: RenderOutput::Empty,
            layout_seq: 0,
        }
    }
}

impl EditorState {
    /// Start over with the sample diagram and no name.
    pub fn new_diagram(&mut self) {
        self.content = DEFAULT_DIAGRAM.to_owned();
        self.name.clear();
    }

    /// Replace the draft with a stored diagram.
    pub fn load(&mut self, diagram: &Diagram) {
        self.content.clone_from(&diagram.content);
        self.name.clone_from(&diagram.name);
    }

    pub fn increase_font_size(&mut self) -> bool {
        self.set_font_size(config::increase_font_size(self.font_size))
    }

    pub fn decrease_font_size(&mut self) -> bool {
        self.set_font_size(config::decrease_font_size(self.font_size))
    }

    fn set_font_size(&mut self, next: u32) -> bool {
        if next == self.font_size {
            return false;
        }
        self.font_size = next;
        self.request_relayout();
        true
    }

    pub fn can_increase_font_size(&self) -> bool {
        self.font_size < config::MAX_FONT_SIZE
    }

    pub fn can_decrease_font_size(&self) -> bool {
        self.font_size > config::MIN_FONT_SIZE
    }

    /// Export is offered only while no render error is showing.
    pub fn can_export(&self) -> bool {
        self.render.error().is_none()
    }

    pub fn request_relayout(&mut self) {
        self.layout_seq = self.layout_seq.wrapping_add(1);
    }
}
