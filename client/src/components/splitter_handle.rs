//! Draggable separator between the editor and preview panes.

use leptos::prelude::*;

use preview::consts::{MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT};
#[cfg(feature = "hydrate")]
use preview::engine::Action;
#[cfg(feature = "hydrate")]
use preview::input::Button;
use preview::splitter::Splitter;

use crate::state::editor::EditorState;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
fn event_element(ev: &leptos::ev::PointerEvent) -> Option<web_sys::Element> {
    ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// Vertical handle; dragging it moves the pane boundary.
///
/// Pointer capture keeps move events flowing to the handle while the
/// pointer is anywhere in the document.
#[component]
pub fn SplitterHandle(splitter: RwSignal<Splitter>, viewport_width: RwSignal<f64>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let button = Button::from_dom(ev.button());
                let width = viewport_width.get_untracked();
                if !splitter.try_update(|s| s.on_pointer_down(button, width)).unwrap_or(false) {
                    return;
                }
                ev.prevent_default();
                if let Some(handle) = event_element(&ev) {
                    let _ = handle.set_pointer_capture(ev.pointer_id());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (editor, viewport_width);
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if !splitter.with_untracked(Splitter::is_dragging) {
                    return;
                }
                let width = viewport_width.get_untracked();
                let pointer_x = f64::from(ev.client_x());
                let actions = splitter.try_update(|s| s.on_pointer_move(pointer_x, width)).unwrap_or_default();
                for action in actions {
                    match action {
                        Action::RelayoutEditor => editor.update(EditorState::request_relayout),
                        other => log::debug!("splitter: unexpected action {other:?}"),
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if !splitter.with_untracked(Splitter::is_dragging) {
                    return;
                }
                if let Some(handle) = event_element(&ev) {
                    let _ = handle.release_pointer_capture(ev.pointer_id());
                }
                splitter.update(Splitter::on_pointer_up);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div
            class="splitter"
            class:splitter--dragging=move || splitter.with(Splitter::is_dragging)
            role="separator"
            aria-orientation="vertical"
            aria-valuemin=MIN_SPLIT_PERCENT.to_string()
            aria-valuemax=MAX_SPLIT_PERCENT.to_string()
            aria-valuenow=move || format!("{:.0}", splitter.with(Splitter::position))
            tabindex="0"
            style:left=move || format!("{}%", splitter.with(Splitter::position))
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        ></div>
    }
}
