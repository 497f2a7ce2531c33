use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_chat() {
    assert_eq!(Mode::default(), Mode::Chat);
}

#[test]
fn mode_placeholders_match_each_mode() {
    assert_eq!(Mode::Chat.placeholder(), "Type your message...");
    assert_eq!(Mode::Lyrics.placeholder(), "Enter song name or artist...");
    assert_eq!(Mode::Summarizer.placeholder(), "Paste YouTube URL here...");
}

#[test]
fn mode_all_lists_every_variant_once() {
    for (i, a) in Mode::ALL.iter().enumerate() {
        for (j, b) in Mode::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

// =============================================================
// ModeController
// =============================================================

#[test]
fn conversational_mode_leaves_message_unchanged() {
    let controller = ModeController::default();
    assert_eq!(controller.prefix_message("Hello"), "Hello");
}

#[test]
fn lyrics_mode_prefixes_message() {
    let controller = ModeController::new(Mode::Lyrics);
    assert_eq!(controller.prefix_message("Bohemian Rhapsody"), "lyrics: Bohemian Rhapsody");
}

#[test]
fn summarizer_mode_prefixes_message() {
    let controller = ModeController::new(Mode::Summarizer);
    assert_eq!(
        controller.prefix_message("https://youtu.be/dQw4w9WgXcQ"),
        "summarize: https://youtu.be/dQw4w9WgXcQ"
    );
}

#[test]
fn set_mode_updates_placeholder_immediately() {
    let mut controller = ModeController::default();
    controller.set_mode(Mode::Summarizer);
    assert_eq!(controller.mode(), Mode::Summarizer);
    assert_eq!(controller.placeholder(), "Paste YouTube URL here...");
}

#[test]
fn prefixed_messages_parse_back_to_their_command() {
    let lyrics = ModeController::new(Mode::Lyrics).prefix_message("Yesterday");
    assert_eq!(protocol::Command::parse(&lyrics), protocol::Command::Lyrics("Yesterday"));

    let chat = ModeController::new(Mode::Chat).prefix_message("Yesterday");
    assert_eq!(protocol::Command::parse(&chat), protocol::Command::Chat("Yesterday"));
}
