//! Lyrics lookup: Genius search and page scrape, optional Spotify details,
//! and the HTML card returned to the widget.
//!
//! TRUST BOUNDARY
//! ==============
//! The widget renders lyrics replies as markup without escaping them, so
//! every scraped or third-party value is HTML-escaped here before it is
//! placed in the card. The only tags in the output are the ones this module
//! writes itself.

use std::sync::LazyLock;
use std::time::Duration;

use protocol::escape_html;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;

use super::spotify::SpotifyClient;
use crate::config::ServerConfig;

const GENIUS_SEARCH_URL: &str = "https://api.genius.com/search";
const HTTP_TIMEOUT_SECS: u64 = 20;
const USER_AGENT: &str = concat!("ai-assistant/", env!("CARGO_PKG_VERSION"));
const LYRICS_NOT_FOUND: &str = "Lyrics not found.";

const LYRICS_CONTAINER_SELECTOR: &str = r#"div[data-lyrics-container="true"]"#;
const LEGACY_LYRICS_SELECTOR: &str = "div.lyrics";

/// Lines containing any of these (lowercased, accents folded) are page
/// chrome rather than lyrics.
const BOILERPLATE_KEYWORDS: &[&str] = &[
    "contributors",
    "translations",
    "read more",
    "lyrics",
    "released",
    "see",
    "embed",
    "copyright",
    "you might also like",
    "about",
    "album",
    "tracklist",
    "credits",
    "produced by",
    "written by",
    "composed by",
    "mix",
    "master",
    "engineer",
    "label",
    "publisher",
    "recorded",
    "release date",
    "view all",
    "expand",
    "genius",
    "remix",
    "feat.",
    "featuring",
];

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\[[^\]]+\])").expect("section header pattern is valid"));

// =============================================================================
// ERRORS + TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    /// Genius returned no hits for the query.
    #[error("Song not found.")]
    SongNotFound,

    /// An upstream HTTP call failed.
    #[error("Lyrics lookup failed: {0}")]
    Request(String),

    /// An upstream response could not be decoded.
    #[error("Lyrics lookup returned an unexpected response: {0}")]
    Parse(String),
}

impl LyricsError {
    pub(crate) fn request(e: reqwest::Error) -> Self {
        Self::Request(e.to_string())
    }
}

/// Metadata shown above the lyrics. Empty fields render as blank values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub release_date: String,
}

/// First Genius search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeniusHit {
    pub title: String,
    pub artist: String,
    pub url: String,
}

/// Source of rendered lyrics cards. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LyricsLookup: Send + Sync {
    /// Look up `query` and return the finished card markup.
    ///
    /// # Errors
    ///
    /// Returns [`LyricsError::SongNotFound`] when nothing matches, or a
    /// request/parse error from an upstream service.
    async fn lookup(&self, query: &str) -> Result<String, LyricsError>;
}

// =============================================================================
// GENIUS CLIENT
// =============================================================================

pub struct GeniusLyrics {
    http: reqwest::Client,
    token: String,
    spotify: Option<SpotifyClient>,
}

impl GeniusLyrics {
    /// Build the lookup from config; `Ok(None)` when no Genius token is set.
    ///
    /// # Errors
    ///
    /// Returns [`LyricsError::Request`] if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Option<Self>, LyricsError> {
        let Some(token) = config.genius_token.clone() else {
            return Ok(None);
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(LyricsError::request)?;
        let spotify = config
            .spotify
            .clone()
            .map(|credentials| SpotifyClient::new(http.clone(), credentials));
        Ok(Some(Self { http, token, spotify }))
    }

    /// `true` when Spotify details will be merged into the card.
    #[must_use]
    pub fn has_spotify(&self) -> bool {
        self.spotify.is_some()
    }

    async fn song_details(&self, query: &str) -> SongDetails {
        let fallback = SongDetails { title: query.to_string(), ..SongDetails::default() };
        let Some(spotify) = &self.spotify else {
            return fallback;
        };
        match spotify.track_details(query).await {
            Ok(Some(details)) => details,
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "spotify lookup failed; using genius details only");
                fallback
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Option<GeniusHit>, LyricsError> {
        let body = self
            .http
            .get(GENIUS_SEARCH_URL)
            .bearer_auth(&self.token)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(LyricsError::request)?
            .text()
            .await
            .map_err(LyricsError::request)?;
        parse_search_hit(&body)
    }

    async fn fetch_page(&self, url: &str) -> Result<String, LyricsError> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(LyricsError::request)?
            .text()
            .await
            .map_err(LyricsError::request)
    }
}

#[async_trait::async_trait]
impl LyricsLookup for GeniusLyrics {
    async fn lookup(&self, query: &str) -> Result<String, LyricsError> {
        let mut details = self.song_details(query).await;

        let hit = self.search(query).await?.ok_or(LyricsError::SongNotFound)?;
        if details.title.is_empty() {
            details.title.clone_from(&hit.title);
        }
        if details.artist.is_empty() {
            details.artist.clone_from(&hit.artist);
        }

        let page = self.fetch_page(&hit.url).await?;
        let mut lyrics = clean_lyrics_text(&extract_lyrics(&page));
        if lyrics.is_empty() {
            lyrics = LYRICS_NOT_FOUND.to_string();
        }

        tracing::debug!(title = %details.title, artist = %details.artist, "lyrics card assembled");
        Ok(render_lyrics_card(&details, &format_lyrics_sections(&lyrics)))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct SearchResponse {
    response: SearchHits,
}

#[derive(Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    result: SearchSong,
}

#[derive(Deserialize)]
struct SearchSong {
    title: String,
    url: String,
    primary_artist: Option<SearchArtist>,
}

#[derive(Deserialize)]
struct SearchArtist {
    name: String,
}

// =============================================================================
// PARSING + SCRAPING
// =============================================================================

pub(crate) fn parse_search_hit(json: &str) -> Result<Option<GeniusHit>, LyricsError> {
    let search: SearchResponse = serde_json::from_str(json).map_err(|e| LyricsError::Parse(e.to_string()))?;
    Ok(search.response.hits.into_iter().next().map(|hit| GeniusHit {
        title: hit.result.title,
        artist: hit
            .result
            .primary_artist
            .map(|artist| artist.name)
            .unwrap_or_default(),
        url: hit.result.url,
    }))
}

/// Raw lyric text from a Genius song page, one text node per line.
///
/// Every lyrics container is used; pages without them fall back to the
/// older single `div.lyrics` layout.
pub(crate) fn extract_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);

    let containers = element_texts(&document, LYRICS_CONTAINER_SELECTOR);
    if !containers.is_empty() {
        return containers.join("\n");
    }

    element_texts(&document, LEGACY_LYRICS_SELECTOR)
        .into_iter()
        .next()
        .unwrap_or_else(|| LYRICS_NOT_FOUND.to_string())
}

fn element_texts(document: &Html, css: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(css) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|el| el.text().collect::<Vec<_>>().join("\n"))
        .collect()
}

// =============================================================================
// CLEANING + FORMATTING
// =============================================================================

/// Keep section headers and lyric lines; drop everything else a scraped
/// page tends to carry.
pub fn clean_lyrics_text(lyrics: &str) -> String {
    lyrics
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_boilerplate(line))
        .filter(|line| !is_language_line(line))
        .filter(|line| !line.chars().all(|c| c.is_ascii_digit()))
        .filter(|line| !is_divider(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_boilerplate(line: &str) -> bool {
    let folded = fold_accents(&line.to_lowercase());
    BOILERPLATE_KEYWORDS
        .iter()
        .any(|keyword| folded.contains(keyword))
}

/// Short lines: translation language names, credits fragments, and the
/// like. Section headers survive unless they contain non-ASCII text.
fn is_language_line(line: &str) -> bool {
    if line.split_whitespace().count() > 3 {
        return false;
    }
    !line.is_ascii() || !is_section_header(line)
}

fn is_section_header(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

fn is_divider(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '-' | '\u{2013}' | '\u{2014}') || c.is_whitespace())
}

/// Map accented Latin letters to their base letter.
fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à'..='å' => 'a',
            'ç' => 'c',
            'è'..='ë' => 'e',
            'ì'..='ï' => 'i',
            'ñ' => 'n',
            'ò'..='ö' | 'ø' => 'o',
            'ù'..='ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Escape, then set section headers on their own line and turn newlines
/// into `<br>`.
pub fn format_lyrics_sections(lyrics: &str) -> String {
    let escaped = escape_html(lyrics);
    SECTION_HEADER
        .replace_all(&escaped, "<br>$1<br>")
        .replace('\n', "<br>")
}

/// Title, metadata lines, then the already formatted lyrics.
pub fn render_lyrics_card(details: &SongDetails, formatted_lyrics: &str) -> String {
    format!(
        "<b style=\"font-size:1.5em;\">{title}</b><br>\n<br>\n\
         Song Artist: {artist}<br>\n\
         Album/Movie: {album}<br>\n\
         Genre: {genre}<br>\n\
         Release Date: {release_date}<br>\n<br>\n\
         {formatted_lyrics}",
        title = escape_html(&details.title),
        artist = escape_html(&details.artist),
        album = escape_html(&details.album),
        genre = escape_html(&details.genre),
        release_date = escape_html(&details.release_date),
    )
}

#[cfg(test)]
#[path = "lyrics_test.rs"]
mod tests;
