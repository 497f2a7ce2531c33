//! Shared wire model for the chat endpoint.
//!
//! This crate owns the request/response schema exchanged between the
//! `client` widget and the `server` host, plus the command prefix grammar
//! both sides agree on. Payloads are plain JSON over a single `POST`.
//!
//! It also owns the HTML escaping table, since the server builds trusted
//! lyrics markup that the client inserts without reformatting.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Path of the chat endpoint, relative to the page origin.
pub const CHAT_ENDPOINT: &str = "/api/chat/";

/// Outgoing prefix that routes a message to the lyrics lookup.
pub const LYRICS_PREFIX: &str = "lyrics:";

/// Outgoing prefix that routes a message to the video summarizer.
pub const SUMMARIZE_PREFIX: &str = "summarize:";

/// Error returned by [`decode_reply`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not JSON or lacks a string `reply` field.
    #[error("failed to decode chat reply: {0}")]
    Json(#[from] serde_json::Error),
}

/// Author of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry of the conversation history as it travels on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Body of `POST /api/chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The outgoing message, already carrying its mode prefix.
    pub message: String,
    /// Full transcript in conversation order, including the current user turn.
    #[serde(default)]
    pub history: Vec<Turn>,
}

/// Successful response body of `POST /api/chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Decode a response body into a [`ChatReply`].
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when the body is not a JSON object with a
/// string `reply` field.
pub fn decode_reply(body: &str) -> Result<ChatReply, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Routing decision carried by a message's prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `lyrics: <song>`; carries the trimmed song query.
    Lyrics(&'a str),
    /// `summarize: <url>`; carries the trimmed video URL.
    Summarize(&'a str),
    /// Anything else; carries the message untouched.
    Chat(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a message by its (case-insensitive) prefix.
    #[must_use]
    pub fn parse(message: &'a str) -> Self {
        if has_prefix(message, SUMMARIZE_PREFIX) {
            Self::Summarize(argument(message))
        } else if has_prefix(message, LYRICS_PREFIX) {
            Self::Lyrics(argument(message))
        } else {
            Self::Chat(message)
        }
    }
}

fn has_prefix(message: &str, prefix: &str) -> bool {
    message
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn argument(message: &str) -> &str {
    message.split_once(':').map_or("", |(_, rest)| rest).trim()
}

// =============================================================================
// HTML ESCAPING
// =============================================================================

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ENTITIES.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_html`] for the five entities it produces.
#[must_use]
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match ENTITIES.iter().find(|(_, entity)| tail.starts_with(entity)) {
            Some((ch, entity)) => {
                out.push(*ch);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
