//! Transcript view: message bubbles, copy buttons, and the typing placeholder.

use leptos::prelude::*;

use crate::state::session::ChatSession;
use crate::state::transcript::Message;

#[cfg(feature = "hydrate")]
const COPIED_FEEDBACK_MS: u64 = 1200;

/// Scrolling list of every transcript message, newest at the bottom.
#[component]
pub fn MessageList() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = session.with(|s| (s.transcript().len(), s.is_waiting()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            {move || {
                let messages = session.with(|s| s.transcript().all().to_vec());
                messages
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message/> })
                    .collect::<Vec<_>>()
            }}
            {move || session.with(ChatSession::is_waiting).then(|| view! { <TypingIndicator/> })}
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let is_ai = !is_user;
    let markup = message.markup();
    let avatar = if is_user { "fas fa-user" } else { "fas fa-robot" };
    let content_ref = NodeRef::<leptos::html::Div>::new();

    view! {
        <div class="message" class:message--user=is_user class:message--ai=is_ai>
            <div class="message__avatar">
                <i class=avatar></i>
            </div>
            <div class="message__content" node_ref=content_ref inner_html=markup></div>
            {is_ai.then(|| view! { <CopyButton source=content_ref/> })}
        </div>
    }
}

/// Copies the rendered text of `source` and briefly shows a check mark.
#[component]
fn CopyButton(source: NodeRef<leptos::html::Div>) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = source.get() else {
                return;
            };
            let text = el.inner_text();
            if let Some(window) = web_sys::window() {
                if let Some(clipboard) = window.navigator().clipboard() {
                    let _ = clipboard.write_text(&text);
                    copied.set(true);
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(COPIED_FEEDBACK_MS)).await;
                        copied.set(false);
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = source;
        }
    };

    view! {
        <div class="copy-btn-wrapper">
            <button type="button" class="copy-btn" on:click=on_copy title="Copy">
                <i class=move || if copied.get() { "fas fa-check" } else { "fas fa-copy" }></i>
            </button>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message--ai message--typing">
            <div class="message__avatar">
                <i class="fas fa-robot"></i>
            </div>
            <div class="message__content">
                <div class="typing-indicator">
                    <span class="typing-indicator__dot"></span>
                    <span class="typing-indicator__dot"></span>
                    <span class="typing-indicator__dot"></span>
                </div>
            </div>
        </div>
    }
}
