#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation state that lives outside the conversation.
///
/// The theme is read from storage once hydrated; until then it renders light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Font Awesome icon for the theme toggle.
    #[must_use]
    pub fn theme_icon(self) -> &'static str {
        if self.dark_mode { "fas fa-moon" } else { "fas fa-sun" }
    }
}
