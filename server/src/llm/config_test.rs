use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_MODEL", "gemini-2.0-flash"),
        ("GEMINI_BASE_URL", "https://proxy.test/v1beta/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gemini-2.0-flash");
    assert_eq!(cfg.base_url, "https://proxy.test/v1beta");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_ignores_unparseable_timeouts() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "secret"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_requires_api_key() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_API_KEY"));
}

#[test]
fn from_lookup_rejects_blank_api_key() {
    let err = LlmConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}
