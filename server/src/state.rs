//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one handle per upstream integration, each behind its trait so
//! tests can substitute mocks. Optional integrations are `None` when their
//! credentials are missing.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::lyrics::LyricsLookup;
use crate::services::video::TranscriptSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Chat replies and transcript summaries.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Lyrics cards.
    pub lyrics: Option<Arc<dyn LyricsLookup>>,
    /// Video transcripts.
    pub transcripts: Arc<dyn TranscriptSource>,
}

impl AppState {
    #[must_use]
    pub fn new(
        llm: Option<Arc<dyn LlmChat>>,
        lyrics: Option<Arc<dyn LyricsLookup>>,
        transcripts: Arc<dyn TranscriptSource>,
    ) -> Self {
        Self { llm, lyrics, transcripts }
    }
}
