//! # client
//!
//! Leptos + WASM chat widget: a single-page assistant that talks to the
//! server's chat endpoint in one of three modes (chat, lyrics lookup, video
//! summarization).
//!
//! The crate splits into pure state (`state`, `util::format`) that is unit
//! tested natively, the HTTP transport (`net`), and Leptos components and
//! pages that bind that state to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
