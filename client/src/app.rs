//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpTransport;
use crate::pages::chat::ChatPage;
use crate::state::session::ChatSession;
use crate::state::ui::UiState;
use crate::util::dark_mode;

const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the session, presentation state, and chat transport, then
/// restores the persisted theme once running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(ChatSession::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(HttpTransport::default());

    // Effects only run after hydration, so SSR always renders the light theme.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ai-assistant.css"/>
        <Stylesheet href=FONT_AWESOME_CSS/>
        <Title text="AI Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
