//! Preview pane: rendered diagram under a pan/zoom transform.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer events are translated into `preview::engine::PreviewCore` calls
//! and the returned actions are carried out here: restyling the transform
//! surface, swapping the cursor, and scheduling animation frames. The core
//! lives in an `Rc<RefCell<_>>` shared by the handlers; what the view reads
//! is mirrored into signals.
//!
//! The rendered markup is injected into the surface element passed in by
//! the page, which also hands that element to the export code.
//!
//! The pan surface does not capture the pointer: leaving the surface must
//! end the gesture, and a captured pointer never reports `pointerleave`.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

use preview::consts::{CURSOR_GRAB, TRANSFORM_ORIGIN};
#[cfg(feature = "hydrate")]
use preview::engine::{Action, PreviewCore};
#[cfg(feature = "hydrate")]
use preview::input::Button;
#[cfg(feature = "hydrate")]
use preview::viewport::Point;
use preview::viewport::Viewport;

use crate::state::editor::EditorState;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// What the pane is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PaneContent {
    Placeholder,
    Diagram,
    Error,
}

/// Signals the view reads; written when actions are applied.
#[derive(Clone, Copy)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct Sinks {
    viewport: RwSignal<Viewport>,
    cursor: RwSignal<&'static str>,
    editor: RwSignal<EditorState>,
}

#[cfg(feature = "hydrate")]
fn apply(actions: Vec<Action>, core: &Rc<RefCell<PreviewCore>>, sinks: Sinks) {
    for action in actions {
        match action {
            Action::FrameNeeded => request_frame(core, sinks),
            Action::TransformChanged(viewport) => sinks.viewport.set(viewport),
            Action::SetCursor(cursor) => sinks.cursor.set(cursor),
            Action::RelayoutEditor => sinks.editor.update(EditorState::request_relayout),
        }
    }
}

#[cfg(feature = "hydrate")]
fn commit_frame(core: &Rc<RefCell<PreviewCore>>, sinks: Sinks) {
    let actions = core.borrow_mut().on_frame();
    apply(actions, core, sinks);
}

#[cfg(feature = "hydrate")]
fn request_frame(core: &Rc<RefCell<PreviewCore>>, sinks: Sinks) {
    let Some(window) = web_sys::window() else {
        commit_frame(core, sinks);
        return;
    };

    let core_for_cb = Rc::clone(core);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        commit_frame(&core_for_cb, sinks);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        commit_frame(core, sinks);
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Preview pane with zoom controls.
#[component]
pub fn PreviewPane(surface_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let sinks = Sinks { viewport: RwSignal::new(Viewport::default()), cursor: RwSignal::new(CURSOR_GRAB), editor };
    let viewport = sinks.viewport;
    let cursor = sinks.cursor;

    #[cfg(feature = "hydrate")]
    let core = Rc::new(RefCell::new(PreviewCore::new()));

    let content = Memo::new(move |_| {
        editor.with(|e| {
            if e.render.error().is_some() {
                PaneContent::Error
            } else if e.render.markup().is_some() {
                PaneContent::Diagram
            } else {
                PaneContent::Placeholder
            }
        })
    });
    let markup = move || editor.with(|e| e.render.markup().unwrap_or_default().to_owned());
    let error_message = move || editor.with(|e| e.render.error().map(|err| err.message.clone()).unwrap_or_default());

    // ── Zoom controls ───────────────────────────────────────────

    let on_zoom_in = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = core.borrow_mut().zoom_in();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_zoom_out = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = core.borrow_mut().zoom_out();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_reset = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = core.borrow_mut().reset();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    // ── Pan gesture ─────────────────────────────────────────────

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |ev: leptos::ev::PointerEvent| {
                let actions = core.borrow_mut().on_pointer_down(pointer_point(&ev), Button::from_dom(ev.button()));
                if actions.is_empty() {
                    return;
                }
                ev.prevent_default();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |ev: leptos::ev::PointerEvent| {
                let actions = core.borrow_mut().on_pointer_move(pointer_point(&ev));
                apply(actions, &core, sinks);
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
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::PointerEvent| {
                let actions = core.borrow_mut().on_pointer_up();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::PointerEvent| {
                let actions = core.borrow_mut().on_pointer_leave();
                apply(actions, &core, sinks);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <section class="preview">
            <div class="preview__zoom">
                <button
                    class="btn btn--icon"
                    title="Zoom in"
                    disabled=move || !viewport.get().can_zoom_in()
                    on:click=on_zoom_in
                >
                    "+"
                </button>
                <div class="preview__zoom-label">{move || format!("{}%", viewport.get().zoom_percent())}</div>
                <button
                    class="btn btn--icon"
                    title="Zoom out"
                    disabled=move || !viewport.get().can_zoom_out()
                    on:click=on_zoom_out
                >
                    "−"
                </button>
                <button class="btn btn--icon" title="Reset view" on:click=on_reset>
                    "⟲"
                </button>
            </div>

            <Show when=move || content.get() == PaneContent::Error>
                <div class="preview__message preview__message--error">
                    <div class="preview__message-title">"Syntax Error"</div>
                    <div class="preview__message-body">{error_message}</div>
                </div>
            </Show>

            <Show when=move || content.get() == PaneContent::Placeholder>
                <div class="preview__message">
                    <div class="preview__message-title">"Start typing to see your diagram"</div>
                    <div class="preview__message-body">"Your Mermaid diagram will appear here"</div>
                </div>
            </Show>

            <div
                class="preview__viewport"
                class:preview__viewport--hidden=move || content.get() != PaneContent::Diagram
                style:cursor=move || cursor.get()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_leave.clone()
                on:pointerleave=on_pointer_leave
            >
                <div
                    class="preview__surface"
                    node_ref=surface_ref
                    style:transform=move || viewport.get().transform_css()
                    style:transform-origin=TRANSFORM_ORIGIN
                    inner_html=markup
                ></div>
            </div>
        </section>
    }
}
