//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent`. Pure parsing in
//! `parse_response` for testability.

use super::config::LlmTimeouts;
use super::types::LlmError;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = endpoint(&self.base_url, model);
        let body = ApiRequest { contents: [RequestContent { parts: [RequestPart { text: prompt }] }] };

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(serde::Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(serde::Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Text of the first part of the first candidate.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    api.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(LlmError::EmptyResponse)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
