//! Message input row.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::ChatTransport;
use crate::net::api::HttpTransport;
use crate::state::session::ChatSession;

/// Multi-line input with a send button.
///
/// Enter sends, Shift+Enter inserts a newline. Rejected submissions (blank,
/// over-long, or while a reply is pending) are dropped silently.
#[component]
pub fn Composer() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let transport = expect_context::<HttpTransport>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get_untracked();
        let Some(turn) = session.try_update(|s| s.begin(&text).ok()).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = transport.send(&turn.request).await;
            session.update(|s| {
                s.complete(turn, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (turn, transport);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !session.with(ChatSession::is_waiting);

    view! {
        <div class="chat-input">
            <textarea
                class="chat-input__field"
                rows="1"
                placeholder=move || session.with(ChatSession::placeholder)
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="btn btn--primary chat-input__send" on:click=on_click disabled=move || !can_send() title="Send">
                <i class="fas fa-paper-plane"></i>
            </button>
        </div>
    }
}
