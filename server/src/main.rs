mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmChat;
use crate::services::lyrics::{GeniusLyrics, LyricsLookup};
use crate::services::video::YtDlpTranscripts;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env();

    // Initialize LLM client (non-fatal: chat and summaries fall back if config missing).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; chat replies disabled");
            None
        }
    };

    let lyrics: Option<Arc<dyn LyricsLookup>> = match GeniusLyrics::from_config(&config) {
        Ok(Some(lookup)) => {
            tracing::info!(spotify = lookup.has_spotify(), "lyrics lookup initialized");
            Some(Arc::new(lookup))
        }
        Ok(None) => {
            tracing::warn!("GENIUS_TOKEN not set; lyrics lookup disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "lyrics lookup unavailable");
            None
        }
    };

    let transcripts = Arc::new(YtDlpTranscripts::new(config.yt_dlp_bin.clone()));
    let state = state::AppState::new(llm, lyrics, transcripts);

    let app = routes::app(state).expect("router setup failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ai-assistant listening");
    axum::serve(listener, app).await.expect("server failed");
}
