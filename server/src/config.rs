//! Server configuration parsed from environment variables.
//!
//! Optional credentials disable the feature that needs them instead of
//! failing startup; the LLM key lives in [`crate::llm::config`].

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_YT_DLP_BIN: &str = "yt-dlp";

/// Spotify client-credentials pair.
#[derive(Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub genius_token: Option<String>,
    pub spotify: Option<SpotifyCredentials>,
    pub yt_dlp_bin: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `GENIUS_TOKEN`: lyrics lookup disabled when absent
    /// - `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`: song details skipped unless both are set
    /// - `YT_DLP_BIN`: default `yt-dlp` on `PATH`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or(lookup("PORT"), DEFAULT_PORT);
        let genius_token = non_blank(lookup("GENIUS_TOKEN"));
        let spotify = match (non_blank(lookup("SPOTIFY_CLIENT_ID")), non_blank(lookup("SPOTIFY_CLIENT_SECRET"))) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials { client_id, client_secret }),
            _ => None,
        };
        let yt_dlp_bin = non_blank(lookup("YT_DLP_BIN")).unwrap_or_else(|| DEFAULT_YT_DLP_BIN.to_string());

        Self { port, genius_token, spotify, yt_dlp_bin }
    }
}

/// Parse `raw`, falling back to `default` when absent or malformed.
pub(crate) fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
