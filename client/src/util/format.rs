//! Restricted markdown-to-HTML formatter for chat messages.
//!
//! PIPELINE
//! ========
//! Passes run strictly in this order, each consuming the previous output:
//!
//! 1. `escape_html` over the whole message (nothing later may emit raw input)
//! 2. fenced code blocks, replies only, and only when the reply opens with
//!    a fence
//! 3. headings (`###`, `##`, `#`)
//! 4. strong (`**x**`, `__x__`)
//! 5. emphasis (`*x*`, `_x_`)
//! 6. inline code (`` `x` ``)
//! 7. list items and list containers
//! 8. line breaks
//!
//! Fenced code bodies are lifted out after step 1 and skip steps 3-8.
//! Strong and emphasis spans never cross a line break; inline code may.
//!
//! TRADE-OFFS
//! ==========
//! Emphasis runs before inline code and after strong, so a word that mixes
//! single and double markers can come out oddly nested. That ordering is
//! part of the rendering contract and stays as is.

use std::fmt::Write;

pub use protocol::{escape_html, unescape_html};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const FENCE: &str = "```";

/// Render user-typed text as display-safe markup. Never fails.
///
/// Fences are left as typed; only [`format_reply`] lifts code blocks.
pub fn format_message(raw: &str) -> String {
    let escaped = escape_html(&raw.replace("\r\n", "\n"));
    format_text(&escaped)
}

/// Render assistant reply text as display-safe markup. Never fails.
pub fn format_reply(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let escaped = escape_html(&normalized);

    let segments = if normalized.trim_start().starts_with(FENCE) {
        split_fences(&escaped)
    } else {
        vec![Segment::Text(&escaped)]
    };

    let mut out = String::with_capacity(escaped.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(&format_text(text)),
            Segment::Code { lang, body } => push_code_block(&mut out, lang, body),
        }
    }
    out
}

// =============================================================================
// FENCED CODE
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Code { lang: Option<&'a str>, body: &'a str },
}

/// Split escaped text into prose and fenced code segments.
///
/// A fence is `` ``` ``, an optional word-character language tag, optional
/// whitespace, then the body up to the next `` ``` ``. An opening fence with
/// no closing fence stays in the prose.
fn split_fences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let lang_len = after_open
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after_open.len());
        let after_lang = &after_open[lang_len..];
        let body_start = after_lang.trim_start();

        let Some(close) = body_start.find(FENCE) else {
            break;
        };

        if open > 0 {
            segments.push(Segment::Text(&rest[..open]));
        }
        let lang = (lang_len > 0).then(|| &after_open[..lang_len]);
        let body = &body_start[..close];
        segments.push(Segment::Code { lang, body: body.strip_suffix('\n').unwrap_or(body) });
        rest = &body_start[close + FENCE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

fn push_code_block(out: &mut String, lang: Option<&str>, body: &str) {
    match lang {
        Some(lang) => {
            let _ = write!(out, "<pre><code class=\"language-{lang}\">{body}</code></pre>");
        }
        None => {
            let _ = write!(out, "<pre><code>{body}</code></pre>");
        }
    }
}

// =============================================================================
// PROSE PASSES
// =============================================================================

fn format_text(text: &str) -> String {
    let text = headings(text);
    let text = strong(&text);
    let text = emphasis(&text);
    let text = inline_code(&text);
    let text = lists(&text);
    line_breaks(&text)
}

fn headings(text: &str) -> String {
    map_lines(text, |line| {
        for (marker, tag) in [("### ", "h3"), ("## ", "h2"), ("# ", "h1")] {
            if let Some(content) = line.strip_prefix(marker) {
                return format!("<{tag}>{content}</{tag}>");
            }
        }
        line.to_owned()
    })
}

fn strong(text: &str) -> String {
    let text = wrap_spans(text, "**", "strong");
    wrap_spans(&text, "__", "strong")
}

fn emphasis(text: &str) -> String {
    let text = wrap_spans(text, "*", "em");
    wrap_spans(&text, "_", "em")
}

/// Wrap every `marker…marker` span on a single line in `<tag>`.
///
/// Matches leftmost-first with the shortest body, like a lazy regex; when no
/// closing marker exists on the line, scanning resumes one byte later.
fn wrap_spans(text: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        let line_end = after.find('\n').unwrap_or(after.len());
        if let Some(end) = after[..line_end].find(marker) {
            out.push_str(&rest[..start]);
            let _ = write!(out, "<{tag}>{}</{tag}>", &after[..end]);
            rest = &after[end + marker.len()..];
        } else {
            // Markers are ASCII, so one byte is one char.
            out.push_str(&rest[..=start]);
            rest = &rest[start + 1..];
        }
    }

    out.push_str(rest);
    out
}

fn inline_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('`') {
        let after = &rest[start + 1..];
        match after.find('`') {
            Some(0) => {
                out.push_str(&rest[..=start]);
                rest = after;
            }
            Some(end) => {
                out.push_str(&rest[..start]);
                let _ = write!(out, "<code>{}</code>", &after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn container(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Numbered => "ol",
        }
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    let trimmed = line.trim_start();
    if let Some(content) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
        return Some((ListKind::Bullet, content));
    }

    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..]
        .strip_prefix(". ")
        .map(|content| (ListKind::Numbered, content))
}

/// Turn list lines into `<li>` and wrap each run of consecutive items in
/// one container. The run's first item picks `<ul>` or `<ol>`.
fn lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut run: Option<(ListKind, String)> = None;

    for line in text.split('\n') {
        let Some((kind, content)) = list_item(line) else {
            flush_list(&mut lines, run.take());
            lines.push(line.to_owned());
            continue;
        };

        match &mut run {
            Some((_, items)) => {
                let _ = write!(items, "<li>{content}</li>");
            }
            None => run = Some((kind, format!("<li>{content}</li>"))),
        }
    }

    flush_list(&mut lines, run);
    lines.join("\n")
}

fn flush_list(lines: &mut Vec<String>, run: Option<(ListKind, String)>) {
    if let Some((kind, items)) = run {
        let tag = kind.container();
        lines.push(format!("<{tag}>{items}</{tag}>"));
    }
}

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

fn map_lines(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}
