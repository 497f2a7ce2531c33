//! Chat endpoint logic: prompt assembly and command dispatch.
//!
//! DESIGN
//! ======
//! Every request yields a reply string. Failures are reported in-band
//! (`"Error: ..."` or a fixed apology) so the widget always has something
//! to show; the HTTP status stays 200.

use std::fmt::{self, Write as _};

use protocol::{ChatRequest, Command, Role, Turn, escape_html};

use crate::state::AppState;

/// Reply when plain chat cannot be answered.
pub const CHAT_FALLBACK: &str = "Sorry, I couldn't process your request.";
/// Reply when a transcript was fetched but could not be summarized.
pub const SUMMARY_FALLBACK: &str = "Failed to summarize.";

const LYRICS_DISABLED: &str = "Lyrics lookup is not configured.";
const SUMMARY_PROMPT_PREFIX: &str = "Summarize this transcript: ";

/// Render earlier turns as a `User:`/`Assistant:` script ending in an open
/// assistant line; with no earlier turns the prompt is the bare message.
///
/// A trailing user turn in `history` is the message itself and is skipped.
pub fn build_prompt(message: &str, history: &[Turn]) -> String {
    let earlier = match history.split_last() {
        Some((last, rest)) if last.role == Role::User => rest,
        _ => history,
    };
    if earlier.is_empty() {
        return message.to_string();
    }

    let mut prompt = String::new();
    for turn in earlier {
        let speaker = match turn.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        let _ = writeln!(prompt, "{speaker}: {}", turn.content);
    }
    let _ = write!(prompt, "User: {message}\nAssistant:");
    prompt
}

/// Produce the reply for one chat request.
pub async fn respond(state: &AppState, request: &ChatRequest) -> String {
    match Command::parse(&request.message) {
        Command::Summarize(url) => summarize_video(state, url).await,
        Command::Lyrics(query) => lyrics_card(state, query).await,
        Command::Chat(message) => chat_reply(state, &build_prompt(message, &request.history)).await,
    }
}

async fn chat_reply(state: &AppState, prompt: &str) -> String {
    let Some(llm) = &state.llm else {
        tracing::warn!("chat requested but no LLM is configured");
        return CHAT_FALLBACK.to_string();
    };
    match llm.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "chat generation failed");
            CHAT_FALLBACK.to_string()
        }
    }
}

async fn lyrics_card(state: &AppState, query: &str) -> String {
    let Some(lyrics) = &state.lyrics else {
        return error_reply(LYRICS_DISABLED);
    };
    match lyrics.lookup(query).await {
        Ok(card) => card,
        Err(e) => {
            tracing::info!(error = %e, %query, "lyrics lookup failed");
            // Lyrics replies are rendered as markup.
            escape_html(&error_reply(e))
        }
    }
}

async fn summarize_video(state: &AppState, url: &str) -> String {
    let transcript = match state.transcripts.transcript(url).await {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::info!(error = %e, %url, "transcript unavailable");
            return error_reply(e);
        }
    };

    let Some(llm) = &state.llm else {
        tracing::warn!("summary requested but no LLM is configured");
        return SUMMARY_FALLBACK.to_string();
    };
    match llm
        .generate(&format!("{SUMMARY_PROMPT_PREFIX}{transcript}"))
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, "summary generation failed");
            SUMMARY_FALLBACK.to_string()
        }
    }
}

fn error_reply(err: impl fmt::Display) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
