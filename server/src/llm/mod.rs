//! LLM: Gemini adapter for chat replies and transcript summaries.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. Services depend on the
//! [`LlmChat`] trait rather than the concrete client so they can be tested
//! with a mock.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::LlmError;

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client bound to one Gemini model.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-1.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.inner.generate(&self.model, prompt).await
    }
}
