//! HTTP transport for the chat endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`, raced against a
//! `gloo-timers` timeout. Server-side (SSR) and native tests: the transport
//! reports [`ChatError::Unavailable`], since the endpoint is only reachable
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network, status, body shape, timeout) collapses into
//! a [`ChatError`]; the session turns any of them into the fallback reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use protocol::{CHAT_ENDPOINT, ChatRequest, DecodeError};

/// Default time to wait for a reply before giving up.
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

/// Errors produced by a chat round trip.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("chat request failed: {0}")]
    Request(String),
    /// The endpoint answered with a non-success status.
    #[error("chat endpoint returned status {0}")]
    Status(u16),
    /// The body was not a `{ "reply": ... }` object.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// No reply arrived in time.
    #[error("no reply within {0} ms")]
    Timeout(u32),
    /// Called outside a browser.
    #[error("chat transport is only available in the browser")]
    Unavailable,
}

/// One request/response exchange with the remote chat endpoint.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    /// Send `request` and resolve to the reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] on any transport or decoding failure.
    async fn send(&self, request: &ChatRequest) -> Result<String, ChatError>;
}

/// Browser transport posting JSON to the chat endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    pub endpoint: &'static str,
    pub timeout_ms: u32,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self { endpoint: CHAT_ENDPOINT, timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, ChatError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let call = Box::pin(post_chat(self.endpoint, request));
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
            match select(call, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ChatError::Timeout(self.timeout_ms)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ChatError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<String, ChatError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(request)
        .map_err(|e| ChatError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ChatError::Status(resp.status()));
    }
    let body = resp.text().await.map_err(|e| ChatError::Request(e.to_string()))?;
    reply_from_body(&body)
}

#[cfg(any(test, feature = "hydrate"))]
fn reply_from_body(body: &str) -> Result<String, ChatError> {
    Ok(protocol::decode_reply(body)?.reply)
}
