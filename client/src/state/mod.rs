//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`mode`, `transcript`, `session`, `ui`) so the
//! conversation logic stays free of Leptos and can be tested natively.
//! Components reach it through `RwSignal` contexts provided by `App`.

pub mod mode;
pub mod session;
pub mod transcript;
pub mod ui;
