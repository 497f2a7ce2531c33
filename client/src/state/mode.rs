#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use protocol::{LYRICS_PREFIX, SUMMARIZE_PREFIX};

/// Interaction category selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Free-form conversation.
    #[default]
    Chat,
    /// Song lyrics lookup.
    Lyrics,
    /// YouTube video summary.
    Summarizer,
}

impl Mode {
    /// Every mode, in tab order.
    pub const ALL: [Self; 3] = [Self::Chat, Self::Lyrics, Self::Summarizer];

    /// Placeholder shown in the message input.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Chat => "Type your message...",
            Self::Lyrics => "Enter song name or artist...",
            Self::Summarizer => "Paste YouTube URL here...",
        }
    }

    /// Command prefix carried by outgoing messages, if any.
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Chat => None,
            Self::Lyrics => Some(LYRICS_PREFIX),
            Self::Summarizer => Some(SUMMARIZE_PREFIX),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Lyrics => "Lyrics",
            Self::Summarizer => "Summarizer",
        }
    }

    /// One-line description used on the welcome suggestion cards.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Chat => "Ask anything and get a conversational answer.",
            Self::Lyrics => "Find the lyrics and details of a song.",
            Self::Summarizer => "Summarize a YouTube video from its link.",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Chat => "fas fa-comments",
            Self::Lyrics => "fas fa-music",
            Self::Summarizer => "fab fa-youtube",
        }
    }
}

/// Holds the active mode and derives per-mode input behavior from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. Affects the next submitted message only.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.mode.placeholder()
    }

    /// Prepend the active mode's command prefix (plus a space) to `raw`.
    #[must_use]
    pub fn prefix_message(&self, raw: &str) -> String {
        match self.mode.prefix() {
            Some(prefix) => format!("{prefix} {raw}"),
            None => raw.to_owned(),
        }
    }
}
