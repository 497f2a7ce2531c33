use super::*;

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert!(transcript.last().is_none());
}

#[test]
fn append_preserves_insertion_order() {
    let mut transcript = Transcript::default();
    transcript.append(Role::User, "first");
    transcript.append(Role::Assistant, "second");
    transcript.append(Role::User, "third");

    let contents: Vec<&str> = transcript.all().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "third"]);
    assert_eq!(transcript.len(), 3);
}

#[test]
fn append_assigns_distinct_ids() {
    let mut transcript = Transcript::default();
    let a = transcript.append(Role::User, "a").id.clone();
    let b = transcript.append(Role::User, "a").id.clone();
    assert_ne!(a, b);
}

#[test]
fn history_projects_role_and_content() {
    let mut transcript = Transcript::default();
    transcript.append(Role::User, "Hello");
    transcript.append_with(Role::Assistant, "<b>Hi</b>", RenderPolicy::TrustedMarkup);

    assert_eq!(
        transcript.history(),
        vec![Turn::new(Role::User, "Hello"), Turn::new(Role::Assistant, "<b>Hi</b>")]
    );
}

#[test]
fn clear_empties_transcript() {
    let mut transcript = Transcript::default();
    transcript.append(Role::User, "Hello");
    transcript.clear();
    assert!(transcript.is_empty());
    assert!(transcript.history().is_empty());
}

// =============================================================
// RenderPolicy / Message::markup
// =============================================================

#[test]
fn only_lyrics_replies_are_trusted() {
    assert_eq!(RenderPolicy::for_reply(Mode::Lyrics), RenderPolicy::TrustedMarkup);
    assert_eq!(RenderPolicy::for_reply(Mode::Chat), RenderPolicy::Formatted);
    assert_eq!(RenderPolicy::for_reply(Mode::Summarizer), RenderPolicy::Formatted);
}

#[test]
fn formatted_reply_is_trimmed_and_formatted() {
    let mut transcript = Transcript::default();
    let message = transcript.append(Role::Assistant, "  **bold** and *italic*\n");
    assert_eq!(message.markup(), "<strong>bold</strong> and <em>italic</em>");
}

#[test]
fn trusted_reply_bypasses_formatter() {
    let mut transcript = Transcript::default();
    let message = transcript.append_with(
        Role::Assistant,
        "\n<b style=\"font-size:1.5em;\">Song</b><br>**kept**\n",
        RenderPolicy::TrustedMarkup,
    );
    assert_eq!(message.markup(), "<b style=\"font-size:1.5em;\">Song</b><br>**kept**");
}

#[test]
fn user_message_is_escaped() {
    let mut transcript = Transcript::default();
    let message = transcript.append(Role::User, "<i>hi</i>");
    assert_eq!(message.markup(), "&lt;i&gt;hi&lt;/i&gt;");
    assert!(message.is_user());
}

#[test]
fn only_replies_lift_fenced_code() {
    let mut transcript = Transcript::default();
    let typed = transcript.append(Role::User, "```rm -rf```").markup();
    assert!(!typed.contains("<pre>"));

    let reply = transcript.append(Role::Assistant, "```sh\nls\n```").markup();
    assert_eq!(reply, "<pre><code class=\"language-sh\">ls</code></pre>");
}
