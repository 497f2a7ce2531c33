//! `POST /api/chat/` handler.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use protocol::{ChatReply, ChatRequest, Command};

use crate::services;
use crate::state::AppState;

/// Answer one chat message.
///
/// Upstream failures come back as a 200 with an in-band error reply; only a
/// blank message is rejected outright. Malformed bodies are rejected by the
/// `Json` extractor.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    if request.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let started = Instant::now();
    let reply = services::chat::respond(&state, &request).await;
    tracing::info!(
        command = command_name(&request.message),
        history = request.history.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "chat reply sent"
    );
    Ok(Json(ChatReply { reply }))
}

fn command_name(message: &str) -> &'static str {
    match Command::parse(message) {
        Command::Lyrics(_) => "lyrics",
        Command::Summarize(_) => "summarize",
        Command::Chat(_) => "chat",
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
