//! Spotify track metadata for the lyrics card.
//!
//! Client-credentials token, then a one-result track search, then the
//! artist lookup for genres. Everything here is best-effort: the caller
//! falls back to Genius data when this returns `None`.

use serde::Deserialize;

use super::lyrics::{LyricsError, SongDetails};
use crate::config::SpotifyCredentials;

const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: SpotifyCredentials,
}

impl SpotifyClient {
    #[must_use]
    pub fn new(http: reqwest::Client, credentials: SpotifyCredentials) -> Self {
        Self { http, credentials }
    }

    /// Album, artist, genre, and release date of the best match for `query`.
    ///
    /// The title is left empty; the lyrics source fills it in.
    ///
    /// # Errors
    ///
    /// Returns [`LyricsError::Request`] when an HTTP call fails.
    pub async fn track_details(&self, query: &str) -> Result<Option<SongDetails>, LyricsError> {
        let Some(token) = self.access_token().await? else {
            return Ok(None);
        };

        let body = self
            .http
            .get(format!("{API_BASE_URL}/search"))
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(LyricsError::request)?
            .text()
            .await
            .map_err(LyricsError::request)?;

        let Some(track) = parse_track(&body)? else {
            return Ok(None);
        };

        // Genres are optional decoration; a failed artist lookup leaves them blank.
        let genre = match self.artist_genres(&token, &track.artist_id).await {
            Ok(genre) => genre,
            Err(e) => {
                tracing::debug!(error = %e, "spotify artist lookup failed");
                String::new()
            }
        };

        Ok(Some(SongDetails { genre, ..track.details }))
    }

    async fn access_token(&self) -> Result<Option<String>, LyricsError> {
        let body = self
            .http
            .post(ACCOUNTS_TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(LyricsError::request)?
            .text()
            .await
            .map_err(LyricsError::request)?;
        Ok(parse_token(&body))
    }

    async fn artist_genres(&self, token: &str, artist_id: &str) -> Result<String, LyricsError> {
        let body = self
            .http
            .get(format!("{API_BASE_URL}/artists/{artist_id}"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(LyricsError::request)?
            .text()
            .await
            .map_err(LyricsError::request)?;
        Ok(parse_genres(&body))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Deserialize)]
struct Track {
    album: Album,
    #[serde(default)]
    artists: Vec<Artist>,
}

#[derive(Deserialize)]
struct Album {
    name: String,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct Artist {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct ArtistResponse {
    #[serde(default)]
    genres: Vec<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// First track of a search response, with the id needed for the genre lookup.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TrackMatch {
    pub details: SongDetails,
    pub artist_id: String,
}

/// A token response without `access_token` (bad credentials) yields `None`.
pub(crate) fn parse_token(json: &str) -> Option<String> {
    serde_json::from_str::<TokenResponse>(json)
        .ok()
        .and_then(|t| t.access_token)
}

pub(crate) fn parse_track(json: &str) -> Result<Option<TrackMatch>, LyricsError> {
    let search: SearchResponse = serde_json::from_str(json).map_err(|e| LyricsError::Parse(e.to_string()))?;

    let Some(track) = search.tracks.and_then(|page| page.items.into_iter().next()) else {
        return Ok(None);
    };
    let Some(artist) = track.artists.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(TrackMatch {
        details: SongDetails {
            title: String::new(),
            artist: artist.name,
            album: track.album.name,
            genre: String::new(),
            release_date: track.album.release_date.unwrap_or_default(),
        },
        artist_id: artist.id,
    }))
}

pub(crate) fn parse_genres(json: &str) -> String {
    serde_json::from_str::<ArtistResponse>(json)
        .map(|artist| artist.genres.join(", "))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "spotify_test.rs"]
mod tests;
