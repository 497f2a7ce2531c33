//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and conversation surfaces while
//! reading/writing the shared `ChatSession` and `UiState` context providers.

pub mod chat_header;
pub mod composer;
pub mod message_list;
pub mod mode_tabs;
pub mod welcome_screen;
