//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Stored value for a preference.
pub fn stored_value(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Parse a stored value; anything but `"dark"`/`"light"` counts as unset.
pub fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Preference for a stored value; unset or unknown values mean light.
pub fn preference_from(stored: Option<&str>) -> bool {
    stored.and_then(parse_stored).unwrap_or(false)
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` only if dark mode was stored; with nothing stored the
/// widget starts light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        preference_from(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", stored_value(enabled));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, stored_value(next));
            }
        }
    }
    next
}
