//! Editor page: source pane, live preview, and document actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route. It owns the orchestration the components do not:
//! debounced rendering of the draft, loading `?diagram=<name>` from the
//! store, saving (button or Ctrl/Cmd+S), export, and the responsive
//! split between the two panes.
//!
//! DESIGN
//! ======
//! Rendering is debounced by `DEBOUNCE_DELAY_MS`; each render that actually
//! starts takes a ticket from a `RenderSequencer` and its result is applied
//! only if no newer render has been issued since. Renders are async (the
//! engine returns a promise), so without tickets a slow early render could
//! overwrite a fast later one.
//!
//! ERROR HANDLING
//! ==============
//! Store and export failures surface as destructive notifications whose
//! description is the error's `Display` text. Render failures are shown
//! inline by the preview pane and never touch the store.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use diagram::catalog::{DIAGRAM_QUERY_PARAM, MANAGE_PATH};
use diagram::config::DEBOUNCE_DELAY_MS;
#[cfg(any(test, feature = "hydrate"))]
use diagram::export::ExportError;
use diagram::export::ExportKind;
use diagram::model::Diagram;
use diagram::notify::NotificationCenter;
use diagram::render::RenderPipeline;
use diagram::sequence::RenderSequencer;
use diagram::store::{Clock, DiagramStore, StorageBackend, StoreError};
use preview::splitter::{Layout, Splitter};

use crate::components::code_editor::CodeEditor;
use crate::components::preview_pane::PreviewPane;
use crate::components::splitter_handle::SplitterHandle;
use crate::components::toolbar::EditorToolbar;
use crate::state::editor::EditorState;
use crate::util::mermaid::MermaidEngine;
use crate::util::notify;
use crate::util::storage::AppStore;
use crate::util::timers::Debouncer;

/// Viewport width assumed until the browser reports the real one.
const INITIAL_VIEWPORT_WIDTH: f64 = 1280.0;

/// Inline styles for the editor and preview panes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PaneStyles {
    pub editor: String,
    pub preview: String,
}

pub(crate) fn pane_styles(layout: Layout) -> PaneStyles {
    match layout {
        Layout::SideBySide { editor_percent } => PaneStyles {
            editor: format!("width: {editor_percent}%"),
            preview: format!("width: {}%", 100.0 - editor_percent),
        },
        Layout::Stacked => PaneStyles { editor: String::new(), preview: String::new() },
    }
}

/// Persist the draft under its current name.
pub(crate) fn save_draft<B: StorageBackend, C: Clock>(
    store: &DiagramStore<B, C>,
    draft: &EditorState,
) -> Result<Diagram, StoreError> {
    store.save(&draft.name, &draft.content)
}

pub(crate) fn missing_diagram_message(name: &str) -> String {
    format!("No saved diagram is named \"{name}\".")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn export_success_message(kind: ExportKind) -> String {
    format!("{} exported successfully!", kind.label())
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn export_failure_message(kind: ExportKind, err: &ExportError) -> String {
    format!("Failed to export {}: {err}", kind.label())
}

/// Editor page component.
#[component]
pub fn EditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let splitter = RwSignal::new(Splitter::new());
    let viewport_width = RwSignal::new(INITIAL_VIEWPORT_WIDTH);

    // Load the diagram named in the query string.
    let store_for_query = store.clone();
    Effect::new(move || {
        let Some(name) = query.with(|q| q.get(DIAGRAM_QUERY_PARAM)) else {
            return;
        };
        match store_for_query.load_by_name(&name) {
            Ok(Some(diagram)) => {
                log::info!("editor: loaded diagram {name:?}");
                editor.update(|e| e.load(&diagram));
            }
            Ok(None) => {
                log::warn!("editor: no saved diagram named {name:?}");
                notify::warning(notifications, "Diagram not found", missing_diagram_message(&name));
            }
            Err(err) => {
                log::warn!("editor: loading {name:?} failed: {err}");
                notify::error(notifications, err.to_string());
            }
        }
    });

    // Debounced render of the draft.
    let pipeline = Rc::new(RenderPipeline::new(MermaidEngine));
    let sequencer = Rc::new(RefCell::new(RenderSequencer::new()));
    let debouncer = Debouncer::new();
    let content = Memo::new(move |_| editor.with(|e| e.content.clone()));
    Effect::new(move || {
        let source = content.get();
        let pipeline = Rc::clone(&pipeline);
        let sequencer = Rc::clone(&sequencer);
        debouncer.schedule(DEBOUNCE_DELAY_MS, move || {
            let ticket = sequencer.borrow_mut().issue();
            leptos::task::spawn_local(async move {
                let output = pipeline.render(&source).await;
                match sequencer.borrow().accept(ticket, output) {
                    Some(output) => editor.update(|e| e.render = output),
                    None => log::debug!("editor: dropped stale render #{}", ticket.value()),
                }
            });
        });
    });

    let on_save = Callback::new(move |()| {
        let outcome = editor.with_untracked(|draft| save_draft(&store, draft));
        match outcome {
            Ok(saved) => {
                log::info!("editor: saved {:?}", saved.name);
                notify::success(notifications, "Diagram saved successfully!");
            }
            Err(err) => {
                log::warn!("editor: save failed: {err}");
                notify::error(notifications, err.to_string());
            }
        }
    });

    let on_new = Callback::new(move |()| editor.update(EditorState::new_diagram));

    let on_manage = Callback::new(move |()| navigate(MANAGE_PATH, NavigateOptions::default()));

    let on_export = Callback::new(move |kind: ExportKind| {
        #[cfg(feature = "hydrate")]
        {
            let Some(surface) = surface_ref.get_untracked() else {
                notify::error(notifications, export_failure_message(kind, &ExportError::MissingElement));
                return;
            };
            let surface: web_sys::Element = surface.into();
            let name = editor.with_untracked(|e| e.name.clone());
            leptos::task::spawn_local(async move {
                let outcome = match kind {
                    ExportKind::Svg => crate::util::export::export_svg(&surface, &name),
                    ExportKind::Png => crate::util::export::export_png(&surface, &name).await,
                };
                match outcome {
                    Ok(filename) => {
                        log::info!("editor: exported {filename}");
                        notify::success(notifications, export_success_message(kind));
                    }
                    Err(err) => {
                        log::warn!("editor: {} export failed: {err}", kind.label());
                        notify::error(notifications, export_failure_message(kind, &err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, surface_ref);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::keyboard::is_save_shortcut;

        let read_width = || web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64());
        Effect::new(move || {
            if let Some(width) = read_width() {
                viewport_width.set(width);
            }
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = read_width() {
                viewport_width.set(width);
                editor.update(EditorState::request_relayout);
            }
        });
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_save_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                ev.prevent_default();
                on_save.run(());
            }
        });
        on_cleanup(move || {
            resize.remove();
            keydown.remove();
        });
    }

    let layout = Memo::new(move |_| splitter.with(|s| s.layout(viewport_width.get())));
    let stacked = move || layout.get() == Layout::Stacked;

    view! {
        <div class="editor-page">
            <EditorToolbar on_new=on_new on_save=on_save on_manage=on_manage on_export=on_export/>
            <main class="editor-page__main" class:editor-page__main--stacked=stacked>
                <div class="editor-page__editor" style=move || pane_styles(layout.get()).editor>
                    <CodeEditor/>
                </div>
                <Show when=move || !stacked()>
                    <SplitterHandle splitter=splitter viewport_width=viewport_width/>
                </Show>
                <div class="editor-page__preview" style=move || pane_styles(layout.get()).preview>
                    <PreviewPane surface_ref=surface_ref/>
                </div>
            </main>
        </div>
    }
}
