use super::*;
use crate::state::test_helpers::{MockLlm, MockLyrics, MockTranscripts, test_app_state};
use protocol::Turn;

fn request(message: &str, history: Vec<Turn>) -> ChatRequest {
    ChatRequest { message: message.to_string(), history }
}

// =========================================================================
// build_prompt
// =========================================================================

#[test]
fn prompt_without_history_is_bare_message() {
    assert_eq!(build_prompt("hello", &[]), "hello");
}

#[test]
fn prompt_skips_trailing_current_turn() {
    let history = vec![Turn::new(Role::User, "hello")];
    assert_eq!(build_prompt("hello", &history), "hello");
}

#[test]
fn prompt_renders_earlier_turns() {
    let history = vec![
        Turn::new(Role::User, "hi"),
        Turn::new(Role::Assistant, "Hello! How can I help?"),
        Turn::new(Role::User, "tell me a joke"),
    ];
    assert_eq!(
        build_prompt("tell me a joke", &history),
        "User: hi\nAssistant: Hello! How can I help?\nUser: tell me a joke\nAssistant:"
    );
}

#[test]
fn prompt_keeps_history_ending_with_assistant() {
    let history = vec![Turn::new(Role::User, "hi"), Turn::new(Role::Assistant, "hey")];
    assert_eq!(build_prompt("again", &history), "User: hi\nAssistant: hey\nUser: again\nAssistant:");
}

// =========================================================================
// respond: chat
// =========================================================================

#[tokio::test]
async fn chat_returns_llm_text() {
    let llm = MockLlm::replying("Hi there");
    let state = AppState::new(Some(llm.clone()), None, MockTranscripts::returning(None));
    let reply = respond(&state, &request("hello", vec![Turn::new(Role::User, "hello")])).await;
    assert_eq!(reply, "Hi there");
    assert_eq!(llm.prompts(), vec!["hello".to_string()]);
}

#[tokio::test]
async fn chat_failure_uses_fallback() {
    let state = AppState::new(Some(MockLlm::failing()), None, MockTranscripts::returning(None));
    assert_eq!(respond(&state, &request("hello", vec![])).await, CHAT_FALLBACK);
}

#[tokio::test]
async fn chat_without_llm_uses_fallback() {
    let state = AppState::new(None, None, MockTranscripts::returning(None));
    assert_eq!(respond(&state, &request("hello", vec![])).await, CHAT_FALLBACK);
}

// =========================================================================
// respond: lyrics
// =========================================================================

#[tokio::test]
async fn lyrics_prefix_routes_to_lookup() {
    let lyrics = MockLyrics::returning(Some("<b>Yesterday</b>"));
    let llm = MockLlm::replying("unused");
    let state = AppState::new(Some(llm.clone()), Some(lyrics.clone()), MockTranscripts::returning(None));
    let reply = respond(&state, &request("lyrics: Yesterday", vec![])).await;
    assert_eq!(reply, "<b>Yesterday</b>");
    assert_eq!(lyrics.queries.lock().unwrap().as_slice(), ["Yesterday".to_string()]);
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn lyrics_prefix_is_case_insensitive() {
    let lyrics = MockLyrics::returning(Some("card"));
    let state = AppState::new(None, Some(lyrics.clone()), MockTranscripts::returning(None));
    assert_eq!(respond(&state, &request("LYRICS:  Hey Jude ", vec![])).await, "card");
    assert_eq!(lyrics.queries.lock().unwrap().as_slice(), ["Hey Jude".to_string()]);
}

#[tokio::test]
async fn lyrics_not_found_is_error_reply() {
    let state = AppState::new(None, Some(MockLyrics::returning(None)), MockTranscripts::returning(None));
    assert_eq!(respond(&state, &request("lyrics: zzz", vec![])).await, "Error: Song not found.");
}

#[tokio::test]
async fn lyrics_disabled_is_error_reply() {
    let state = AppState::new(None, None, MockTranscripts::returning(None));
    assert_eq!(
        respond(&state, &request("lyrics: Yesterday", vec![])).await,
        "Error: Lyrics lookup is not configured."
    );
}

// =========================================================================
// respond: summarize
// =========================================================================

#[tokio::test]
async fn summarize_sends_transcript_to_llm() {
    let llm = MockLlm::replying("A short summary.");
    let transcripts = MockTranscripts::returning(Some("line one\nline two"));
    let state = AppState::new(Some(llm.clone()), None, transcripts.clone());
    let reply = respond(&state, &request("summarize: https://youtu.be/dQw4w9WgXcQ", vec![])).await;
    assert_eq!(reply, "A short summary.");
    assert_eq!(transcripts.urls.lock().unwrap().as_slice(), ["https://youtu.be/dQw4w9WgXcQ".to_string()]);
    assert_eq!(llm.prompts(), vec!["Summarize this transcript: line one\nline two".to_string()]);
}

#[tokio::test]
async fn summarize_transcript_error_is_error_reply() {
    let llm = MockLlm::replying("unused");
    let state = AppState::new(Some(llm.clone()), None, MockTranscripts::returning(None));
    let reply = respond(&state, &request("summarize: https://youtu.be/dQw4w9WgXcQ", vec![])).await;
    assert_eq!(reply, "Error: No subtitles found for this language.");
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn summarize_llm_failure_uses_summary_fallback() {
    let state = AppState::new(Some(MockLlm::failing()), None, MockTranscripts::returning(Some("text")));
    assert_eq!(
        respond(&state, &request("summarize: https://youtu.be/dQw4w9WgXcQ", vec![])).await,
        SUMMARY_FALLBACK
    );
}

#[tokio::test]
async fn summarize_ignores_history() {
    let llm = MockLlm::replying("ok");
    let state = AppState::new(Some(llm.clone()), None, MockTranscripts::returning(Some("t")));
    let history = vec![Turn::new(Role::User, "earlier"), Turn::new(Role::Assistant, "reply")];
    respond(&state, &request("summarize: https://youtu.be/dQw4w9WgXcQ", history)).await;
    assert_eq!(llm.prompts(), vec!["Summarize this transcript: t".to_string()]);
}

#[tokio::test]
async fn default_state_answers_chat() {
    let state = test_app_state("pong");
    assert_eq!(respond(&state, &request("ping", vec![])).await, "pong");
}
