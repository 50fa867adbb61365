//! Source text editor: a textarea with a line-number gutter.
//!
//! DESIGN
//! ======
//! The textarea is bound to `EditorState::content` in both directions. The
//! gutter scrolls with it through [`EditorBridge::relayout`], which also
//! runs whenever `layout_seq` is bumped (font size or pane width changes).

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::util::editor_bridge::{EditorBridge, gutter_text};

/// Code editor pane for the diagram source.
#[component]
pub fn CodeEditor() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let bridge = EditorBridge::new(NodeRef::new(), NodeRef::new());

    let layout_seq = Memo::new(move |_| editor.with(|e| e.layout_seq));
    Effect::new(move || {
        layout_seq.track();
        bridge.relayout();
    });

    let font_size = move || format!("{}px", editor.with(|e| e.font_size));

    view! {
        <div class="code-editor">
            <div class="code-editor__gutter" node_ref=bridge.gutter() aria-hidden="true" style:font-size=font_size>
                <pre>{move || editor.with(|e| gutter_text(&e.content))}</pre>
            </div>
            <textarea
                class="code-editor__input"
                node_ref=bridge.textarea()
                spellcheck="false"
                autocomplete="off"
                wrap="off"
                aria-label="Diagram source"
                style:font-size=font_size
                prop:value=move || editor.with(|e| e.content.clone())
                on:input=move |ev| {
                    let content = event_target_value(&ev);
                    editor.update(|e| e.content = content);
                }
                on:scroll=move |_| bridge.relayout()
            ></textarea>
        </div>
    }
}
