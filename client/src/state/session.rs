//! Conversation session: validation, history, and one round trip per turn.
//!
//! DESIGN
//! ======
//! A turn is split into [`ChatSession::begin`] (validate, append the user
//! message, build the request) and [`ChatSession::complete`] (append the
//! reply or the fallback). The reactive UI holds the session in a signal
//! and cannot keep a mutable borrow across the network await, so it calls
//! the two halves around its own `spawn_local`; [`ChatSession::submit`]
//! composes them for everything else.
//!
//! At most one turn is in flight. Clearing bumps a generation counter so a
//! reply to a request issued before the clear is dropped on arrival
//! instead of landing in the fresh conversation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use protocol::{ChatRequest, Role};

use crate::net::api::{ChatError, ChatTransport};
use crate::state::mode::{Mode, ModeController};
use crate::state::transcript::{RenderPolicy, Transcript};

/// Longest accepted message, in characters, after trimming.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Assistant message appended when a round trip fails.
pub const FALLBACK_REPLY: &str = "Sorry, there was a problem connecting to the server.";

/// Why a submission was ignored. Never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Nothing left after trimming.
    Empty,
    /// Longer than [`MAX_MESSAGE_CHARS`].
    TooLong,
    /// A previous turn is still waiting for its reply.
    Busy,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The reply was appended.
    Replied,
    /// The fallback message was appended.
    Failed,
    /// The transcript was cleared while the request was in flight.
    Discarded,
}

/// A turn whose request has been built but not yet answered.
#[derive(Clone, Debug)]
pub struct PendingTurn {
    generation: u64,
    pub request: ChatRequest,
    pub reply_render: RenderPolicy,
}

/// Conversation state for one widget instance.
#[derive(Clone, Debug)]
pub struct ChatSession {
    mode: ModeController,
    transcript: Transcript,
    in_flight: bool,
    generation: u64,
    welcome: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ChatSession {
    /// New empty session showing the welcome view.
    #[must_use]
    pub fn new(initial_mode: Mode) -> Self {
        Self {
            mode: ModeController::new(initial_mode),
            transcript: Transcript::default(),
            in_flight: false,
            generation: 0,
            welcome: true,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode.set_mode(mode);
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.mode.placeholder()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// `true` while a request awaits its reply.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn shows_welcome(&self) -> bool {
        self.welcome
    }

    /// Leave the welcome view without sending anything.
    pub fn open_conversation(&mut self) {
        self.welcome = false;
    }

    /// Validate `raw`, record it, and build the outgoing request.
    ///
    /// The stored user message is `raw` as typed; the outgoing message is
    /// the trimmed text with the mode prefix. The request history includes
    /// the user message just appended.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitRejection`] (and leaves the session untouched) for
    /// blank or over-long input, or while another turn is in flight.
    pub fn begin(&mut self, raw: &str) -> Result<PendingTurn, SubmitRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SubmitRejection::Empty);
        }
        if trimmed.chars().count() > MAX_MESSAGE_CHARS {
            return Err(SubmitRejection::TooLong);
        }
        if self.in_flight {
            return Err(SubmitRejection::Busy);
        }

        let message = self.mode.prefix_message(trimmed);
        let reply_render = RenderPolicy::for_reply(self.mode.mode());

        self.welcome = false;
        self.transcript.append(Role::User, raw);
        self.in_flight = true;

        Ok(PendingTurn {
            generation: self.generation,
            request: ChatRequest { message, history: self.transcript.history() },
            reply_render,
        })
    }

    /// Record the result of `turn`'s round trip.
    pub fn complete(&mut self, turn: PendingTurn, result: Result<String, ChatError>) -> TurnOutcome {
        if turn.generation != self.generation {
            return TurnOutcome::Discarded;
        }
        self.in_flight = false;

        match result {
            Ok(reply) => {
                self.transcript
                    .append_with(Role::Assistant, reply, turn.reply_render);
                TurnOutcome::Replied
            }
            Err(e) => {
                leptos::logging::warn!("chat round trip failed: {e}");
                self.transcript.append(Role::Assistant, FALLBACK_REPLY);
                TurnOutcome::Failed
            }
        }
    }

    /// Run one full turn against `transport`.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitRejection`] from [`ChatSession::begin`]; nothing is
    /// sent in that case.
    pub async fn submit<T: ChatTransport>(&mut self, transport: &T, raw: &str) -> Result<TurnOutcome, SubmitRejection> {
        let turn = self.begin(raw)?;
        let result = transport.send(&turn.request).await;
        Ok(self.complete(turn, result))
    }

    /// Empty the transcript and return to the welcome view.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.in_flight = false;
        self.welcome = true;
        self.generation = self.generation.wrapping_add(1);
    }
}
