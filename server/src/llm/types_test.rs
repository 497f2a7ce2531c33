use super::*;

#[test]
fn missing_key_names_the_variable() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");
}

#[test]
fn response_error_hides_body_in_display() {
    let err = LlmError::ApiResponse { status: 403, body: "secret detail".into() };
    assert_eq!(err.to_string(), "API response error: status 403");
}

#[test]
fn parse_and_empty_errors_describe_the_response() {
    assert_eq!(LlmError::ApiParse("eof".into()).to_string(), "API response parse failed: eof");
    assert_eq!(LlmError::EmptyResponse.to_string(), "API response contained no text");
}
