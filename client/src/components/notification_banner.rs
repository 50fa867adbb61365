//! Floating banner for the current notification.

use leptos::prelude::*;

use diagram::notify::NotificationCenter;

/// Renders the notification center's current banner, if any.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let center = expect_context::<RwSignal<NotificationCenter>>();

    move || {
        center.with(|c| c.current().cloned()).map(|notification| {
            let class = format!("notification notification--{}", notification.variant.class_name());
            view! {
                <div class=class role="status" aria-live="polite">
                    <div class="notification__body">
                        <div class="notification__title">{notification.title}</div>
                        {notification
                            .description
                            .map(|description| {
                                view! { <div class="notification__description">{description}</div> }
                            })}
                    </div>
                    <button
                        class="notification__close"
                        title="Dismiss"
                        on:click=move |_| center.update(NotificationCenter::hide)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
