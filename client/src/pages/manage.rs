//! Management page listing saved diagrams with search, open, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/manage-diagrams` route. The list is read from the store
//! once the page mounts in the browser (storage does not exist during
//! server rendering) and replaced wholesale after each delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use diagram::catalog::EDITOR_PATH;
use diagram::notify::NotificationCenter;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::diagram_card::DiagramCard;
use crate::state::manage::ManageState;
use crate::util::notify;
use crate::util::storage::AppStore;

/// Management page component.
#[component]
pub fn ManagePage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();
    let manage = RwSignal::new(ManageState { loading: true, ..ManageState::default() });

    let store_for_list = store.clone();
    Effect::new(move || match store_for_list.list() {
        Ok(diagrams) => {
            log::debug!("manage: listed {} diagrams", diagrams.len());
            manage.update(|m| m.replace(diagrams));
        }
        Err(err) => {
            log::warn!("manage: listing failed: {err}");
            manage.update(|m| {
                m.loading = false;
                m.error = Some(err.to_string());
            });
        }
    });

    let on_delete_request = Callback::new(move |name: String| manage.update(|m| m.pending_delete = Some(name)));
    let on_delete_cancel = Callback::new(move |()| manage.update(|m| m.pending_delete = None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(name) = manage.try_update(|m| m.pending_delete.take()).flatten() else {
            return;
        };
        match store.delete(&name) {
            Ok(remaining) => {
                log::info!("manage: deleted {name:?}");
                manage.update(|m| m.replace(remaining));
                notify::success(notifications, "Diagram deleted successfully");
            }
            Err(err) => {
                log::warn!("manage: delete {name:?} failed: {err}");
                notify::error(notifications, format!("Failed to delete diagram: {err}"));
            }
        }
    });

    let go_to_editor = Callback::new(move |()| navigate(EDITOR_PATH, NavigateOptions::default()));

    let delete_message = move || {
        manage.with(|m| m.pending_delete.clone()).map_or_else(String::new, |name| {
            format!("Are you sure you want to delete \"{name}\"? This action cannot be undone.")
        })
    };

    view! {
        <div class="manage-page">
            <header class="manage-page__header">
                <button class="btn btn--ghost" on:click=move |_| go_to_editor.run(())>
                    "← Back to Editor"
                </button>
                <h1 class="manage-page__title">"Manage Diagrams"</h1>
                <span class="manage-page__count">{move || manage.with(ManageState::count_label)}</span>
            </header>

            <div class="manage-page__content">
                <input
                    class="manage-page__search"
                    type="search"
                    placeholder="Search diagrams..."
                    prop:value=move || manage.with(|m| m.search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        manage.update(|m| m.search = term);
                    }
                />

                <Show when=move || manage.with(|m| m.error.is_some())>
                    <p class="manage-page__error">{move || manage.with(|m| m.error.clone().unwrap_or_default())}</p>
                </Show>

                <Show
                    when=move || !manage.with(|m| m.loading)
                    fallback=move || view! { <p class="manage-page__loading">"Loading diagrams..."</p> }
                >
                    {move || match manage.with(ManageState::empty_state) {
                        Some(empty) => {
                            view! {
                                <div class="manage-page__empty">
                                    <h3>{empty.title}</h3>
                                    <p>{empty.hint}</p>
                                    <Show when=move || empty.offer_create>
                                        <button class="btn btn--primary" on:click=move |_| go_to_editor.run(())>
                                            "Create New Diagram"
                                        </button>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="manage-page__grid">
                                    {manage
                                        .with(ManageState::visible)
                                        .into_iter()
                                        .map(|diagram| view! { <DiagramCard diagram=diagram on_delete=on_delete_request/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Show>
            </div>

            <Show when=move || manage.with(|m| m.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete Diagram".to_owned()
                    message=delete_message()
                    confirm_label="Delete".to_owned()
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
