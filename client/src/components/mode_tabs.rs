//! Tab strip for switching the interaction mode.

use leptos::prelude::*;

use crate::state::mode::Mode;
use crate::state::session::ChatSession;

/// One tab per [`Mode`]; the active one is highlighted.
#[component]
pub fn ModeTabs() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();

    view! {
        <nav class="mode-tabs">
            {Mode::ALL
                .iter()
                .map(|&mode| {
                    let is_active = move || session.with(|s| s.mode() == mode);
                    view! {
                        <button
                            class="mode-tabs__tab"
                            class:mode-tabs__tab--active=is_active
                            on:click=move |_| session.update(|s| s.set_mode(mode))
                        >
                            <i class=mode.icon()></i>
                            <span>{mode.label()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
