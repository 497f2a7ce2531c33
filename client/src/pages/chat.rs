//! The single chat screen.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::mode_tabs::ModeTabs;
use crate::components::welcome_screen::WelcomeScreen;
use crate::state::session::ChatSession;

/// Header, mode tabs, then either the welcome screen or the transcript,
/// with the composer pinned to the bottom.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();

    view! {
        <div class="chat-container">
            <ChatHeader/>
            <ModeTabs/>
            <main class="chat-container__body">
                <Show
                    when=move || session.with(ChatSession::shows_welcome)
                    fallback=|| view! { <MessageList/> }
                >
                    <WelcomeScreen/>
                </Show>
            </main>
            <Composer/>
        </div>
    }
}
