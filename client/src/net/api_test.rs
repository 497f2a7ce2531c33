use super::*;

#[test]
fn default_transport_targets_chat_endpoint() {
    let transport = HttpTransport::default();
    assert_eq!(transport.endpoint, "/api/chat/");
    assert_eq!(transport.timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn reply_from_body_extracts_reply() {
    assert_eq!(reply_from_body(r#"{"reply":"Hi!"}"#).expect("reply"), "Hi!");
}

#[test]
fn reply_from_body_rejects_other_shapes() {
    let err = reply_from_body(r#"{"error":"boom"}"#).expect_err("should fail");
    assert!(matches!(err, ChatError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_is_unavailable_outside_browser() {
    let request = ChatRequest { message: "Hello".to_owned(), history: Vec::new() };
    let err = futures::executor::block_on(HttpTransport::default().send(&request)).expect_err("no browser");
    assert!(matches!(err, ChatError::Unavailable));
}

#[test]
fn chat_error_messages_are_descriptive() {
    assert_eq!(ChatError::Status(502).to_string(), "chat endpoint returned status 502");
    assert_eq!(ChatError::Timeout(1500).to_string(), "no reply within 1500 ms");
}
