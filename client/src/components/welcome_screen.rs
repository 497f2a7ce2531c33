//! Landing view shown before the first message and after a clear.

use leptos::prelude::*;

use crate::state::mode::Mode;
use crate::state::session::ChatSession;

/// Greeting plus one suggestion card per mode. Picking a card selects its
/// mode and opens the conversation view.
#[component]
pub fn WelcomeScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();

    view! {
        <div class="welcome-screen">
            <div class="welcome-screen__logo">
                <i class="fas fa-robot"></i>
            </div>
            <h1 class="welcome-screen__title">"How can I help you today?"</h1>
            <div class="welcome-screen__cards">
                {Mode::ALL
                    .iter()
                    .map(|&mode| {
                        let on_pick = move |_| {
                            session.update(|s| {
                                s.set_mode(mode);
                                s.open_conversation();
                            });
                        };
                        view! {
                            <button class="suggestion-card" on:click=on_pick>
                                <i class=mode.icon()></i>
                                <h3>{mode.label()}</h3>
                                <p>{mode.blurb()}</p>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
