//! Editor toolbar: name field, font size stepper, and document actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toolbar edits the shared editor draft directly (name, font size) and
//! hands document actions (new, save, manage, export) back to the page,
//! which owns the store and the preview surface.

use leptos::prelude::*;

use diagram::export::ExportKind;

use crate::state::editor::EditorState;

/// Top toolbar for the editor page.
#[component]
pub fn EditorToolbar(
    on_new: Callback<()>,
    on_save: Callback<()>,
    on_manage: Callback<()>,
    on_export: Callback<ExportKind>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let export_open = RwSignal::new(false);
    let export_disabled = move || !editor.with(EditorState::can_export);

    let export_item = move |kind: ExportKind| {
        view! {
            <button
                class="toolbar__menu-item"
                role="menuitem"
                on:click=move |_| {
                    export_open.set(false);
                    on_export.run(kind);
                }
            >
                {format!("Export as {}", kind.label())}
            </button>
        }
    };

    view! {
        <header class="toolbar">
            <input
                id="diagram-name"
                class="toolbar__name"
                type="text"
                placeholder="Enter diagram name"
                prop:value=move || editor.with(|e| e.name.clone())
                on:input=move |ev| {
                    let name = event_target_value(&ev);
                    editor.update(|e| e.name = name);
                }
            />

            <div class="toolbar__font-size">
                <button
                    class="btn btn--icon"
                    title="Decrease font size"
                    disabled=move || !editor.with(EditorState::can_decrease_font_size)
                    on:click=move |_| {
                        editor.update(|e| {
                            e.decrease_font_size();
                        });
                    }
                >
                    "−"
                </button>
                <span class="toolbar__font-size-label">{move || format!("{}px", editor.with(|e| e.font_size))}</span>
                <button
                    class="btn btn--icon"
                    title="Increase font size"
                    disabled=move || !editor.with(EditorState::can_increase_font_size)
                    on:click=move |_| {
                        editor.update(|e| {
                            e.increase_font_size();
                        });
                    }
                >
                    "+"
                </button>
            </div>

            <span class="toolbar__spacer"></span>

            <div class="toolbar__actions">
                <button class="btn" on:click=move |_| on_new.run(())>
                    "New"
                </button>
                <button class="btn btn--primary" title="Save (Ctrl+S)" on:click=move |_| on_save.run(())>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| on_manage.run(())>
                    "Manage"
                </button>
                <div class="toolbar__menu">
                    <button
                        class="btn"
                        aria-haspopup="menu"
                        aria-expanded=move || export_open.get().to_string()
                        disabled=export_disabled
                        on:click=move |_| export_open.update(|open| *open = !*open)
                    >
                        "Export"
                    </button>
                    <Show when=move || export_open.get() && !export_disabled()>
                        <div class="toolbar__menu-list" role="menu">
                            {export_item(ExportKind::Png)}
                            {export_item(ExportKind::Svg)}
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
