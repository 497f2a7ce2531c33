//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the upstream integrations (Gemini, Genius, Spotify,
//! `yt-dlp`) so the route handler stays focused on request translation.
//! Each integration sits behind a trait held in `AppState`.

pub mod chat;
pub mod lyrics;
pub mod spotify;
pub mod video;
