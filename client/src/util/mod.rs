//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` is the pure message formatter; `dark_mode` isolates the browser
//! storage glue for the theme preference.

pub mod dark_mode;
pub mod format;
