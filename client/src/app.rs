//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use diagram::notify::NotificationCenter;

use crate::components::notification_banner::NotificationBanner;
use crate::pages::{editor::EditorPage, manage::ManagePage};
use crate::state::editor::EditorState;
use crate::util::storage::browser_store;

/// Script tag source for the external rendering engine.
pub const MERMAID_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.min.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=MERMAID_SCRIPT_URL></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the diagram store, the editor draft, and the notification
/// center to every page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The editor draft lives above the router so it survives a round trip
    // through the management page.
    let editor = RwSignal::new(EditorState::default());
    let notifications = RwSignal::new(NotificationCenter::new());

    provide_context(browser_store());
    provide_context(editor);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/mermaid-desk.css"/>
        <Title text="Mermaid Desk"/>

        <NotificationBanner/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EditorPage/>
                <Route path=StaticSegment("manage-diagrams") view=ManagePage/>
            </Routes>
        </Router>
    }
}
