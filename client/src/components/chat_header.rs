//! Widget header with the clear-chat and theme controls.

use leptos::prelude::*;

use crate::state::session::ChatSession;
use crate::state::ui::UiState;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_clear = move |_| session.update(ChatSession::clear);

    let on_toggle_theme = move |_| {
        let current = ui.get_untracked().dark_mode;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="chat-header">
            <div class="chat-header__brand">
                <i class="fas fa-robot"></i>
                <span class="chat-header__title">"AI Assistant"</span>
            </div>
            <span class="chat-header__spacer"></span>
            <button class="btn chat-header__clear" on:click=on_clear title="Clear chat">
                <i class="fas fa-trash"></i>
            </button>
            <button class="btn chat-header__theme" on:click=on_toggle_theme title="Toggle dark mode">
                <i class=move || ui.get().theme_icon()></i>
            </button>
        </header>
    }
}
