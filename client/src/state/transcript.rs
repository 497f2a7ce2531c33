#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use protocol::{Role, Turn};

use crate::state::mode::Mode;
use crate::util::format::{format_message, format_reply};

/// How a message's content becomes display markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Escaped and run through the markdown formatter.
    #[default]
    Formatted,
    /// Inserted verbatim. Only for replies whose markup the server builds
    /// from escaped values (lyrics cards).
    TrustedMarkup,
}

impl RenderPolicy {
    /// Policy for a reply to a message sent in `mode`.
    #[must_use]
    pub fn for_reply(mode: Mode) -> Self {
        match mode {
            Mode::Lyrics => Self::TrustedMarkup,
            Mode::Chat | Mode::Summarizer => Self::Formatted,
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Local identifier for keyed rendering; never sent to the server.
    pub id: String,
    pub role: Role,
    pub content: String,
    pub render: RenderPolicy,
}

impl Message {
    /// Display markup for the message body.
    #[must_use]
    pub fn markup(&self) -> String {
        match (self.role, self.render) {
            (_, RenderPolicy::TrustedMarkup) => self.content.trim().to_owned(),
            (Role::Assistant, RenderPolicy::Formatted) => format_reply(self.content.trim()),
            (Role::User, RenderPolicy::Formatted) => format_message(&self.content),
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    fn to_turn(&self) -> Turn {
        Turn::new(self.role, self.content.clone())
    }
}

/// Ordered, append-only conversation history for one page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Append a formatted message.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Message {
        self.append_with(role, content, RenderPolicy::Formatted)
    }

    /// Append a message with an explicit render policy.
    pub fn append_with(&mut self, role: Role, content: impl Into<String>, render: RenderPolicy) -> &Message {
        let index = self.messages.len();
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            render,
        });
        &self.messages[index]
    }

    /// All messages in conversation order.
    #[must_use]
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Wire projection of the transcript, in order.
    #[must_use]
    pub fn history(&self) -> Vec<Turn> {
        self.messages.iter().map(Message::to_turn).collect()
    }
}
