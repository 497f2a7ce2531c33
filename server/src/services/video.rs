//! YouTube transcript retrieval through the `yt-dlp` binary.
//!
//! Subtitles (manual or automatic, English) are written as WebVTT into a
//! per-request temporary directory, which is removed when the request ends.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tokio::process::Command;

const SUBTITLE_LANG: &str = "en";
const OUTPUT_TEMPLATE: &str = "%(id)s.%(ext)s";

static YOUTUBE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid"));
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("inline tag pattern is valid"));

#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error("Invalid YouTube URL.")]
    InvalidUrl,

    #[error("No subtitles found for this language.")]
    NoSubtitles,

    #[error("Transcript is empty.")]
    EmptyTranscript,

    #[error("Subtitle fetch error: {0}")]
    Fetch(String),
}

/// Source of plain-text video transcripts. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Transcript text for the video at `url`, one caption line per line.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] for unrecognised URLs, videos without
    /// subtitles, or a failed download.
    async fn transcript(&self, url: &str) -> Result<String, VideoError>;
}

pub struct YtDlpTranscripts {
    bin: String,
}

impl YtDlpTranscripts {
    #[must_use]
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait::async_trait]
impl TranscriptSource for YtDlpTranscripts {
    async fn transcript(&self, url: &str) -> Result<String, VideoError> {
        let video_id = extract_youtube_id(url).ok_or(VideoError::InvalidUrl)?;
        let workdir = tempfile::tempdir().map_err(|e| VideoError::Fetch(e.to_string()))?;

        let output = Command::new(&self.bin)
            .args(subtitle_args(url, workdir.path()))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| VideoError::Fetch(format!("{}: {e}", self.bin)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .map_or_else(|| format!("yt-dlp exited with {}", output.status), |line| line.trim().to_string());
            tracing::warn!(%video_id, %detail, "yt-dlp failed");
            return Err(VideoError::Fetch(detail));
        }

        let path = find_subtitle_file(workdir.path(), video_id)
            .await?
            .ok_or(VideoError::NoSubtitles)?;
        let vtt = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| VideoError::Fetch(e.to_string()))?;

        let transcript = clean_vtt(&vtt);
        if transcript.trim().is_empty() {
            return Err(VideoError::EmptyTranscript);
        }
        tracing::debug!(%video_id, lines = transcript.lines().count(), "transcript fetched");
        Ok(transcript)
    }
}

/// The 11-character id following the first `v=` or `/` that has one.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Command line for a subtitles-only download of `url` into `dir`.
///
/// `url` comes last, after `--`, so it is never read as an option.
pub(crate) fn subtitle_args(url: &str, dir: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "--skip-download",
        "--write-subs",
        "--write-auto-subs",
        "--sub-langs",
        SUBTITLE_LANG,
        "--sub-format",
        "vtt",
        "--quiet",
        "--no-warnings",
        "-o",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(dir.join(OUTPUT_TEMPLATE).into_os_string());
    args.push("--".into());
    args.push(url.into());
    args
}

async fn find_subtitle_file(dir: &Path, video_id: &str) -> Result<Option<PathBuf>, VideoError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| VideoError::Fetch(e.to_string()))?;
    let mut matches = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| VideoError::Fetch(e.to_string()))?
    {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(video_id) && name.ends_with(".vtt") {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches.into_iter().next())
}

/// Caption text from a WebVTT file: no header, cue timings, or inline
/// tags, and no line repeated back to back.
pub fn clean_vtt(vtt: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in vtt.lines().map(str::trim) {
        if line.is_empty()
            || line.starts_with("WEBVTT")
            || line.contains("-->")
            || line.starts_with("Kind:")
            || line.starts_with("Language:")
        {
            continue;
        }
        let text = INLINE_TAG.replace_all(line, "");
        if text.is_empty() || lines.last().is_some_and(|prev| *prev == text) {
            continue;
        }
        lines.push(text.into_owned());
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "video_test.rs"]
mod tests;
