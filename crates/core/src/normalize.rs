//! Whitespace normalization shared by the extractor and the comparator.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+").unwrap());

/// Line boundaries recognised when splitting a text node into physical lines.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Removes indentation from every line and trims the result.
///
/// Whitespace runs inside a line are preserved, so `"a  b"` stays `"a  b"`.
/// A run that starts a line may span several line breaks, which collapses
/// blank lines into the following content.
///
/// # Example
///
/// ```rust
/// use copycheck_core::normalize_text;
///
/// assert_eq!(normalize_text("  Hello\n    world  "), "Hello\nworld");
/// assert_eq!(normalize_text("keep  inner   spacing"), "keep  inner   spacing");
/// ```
pub fn normalize_text(text: &str) -> String {
    LEADING_WS.replace_all(text, "").trim().to_string()
}

/// Splits on every universal line boundary, treating `\r\n` as one break.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !LINE_BREAKS.contains(&ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next_idx, '\n')) = chars.peek()
        {
            chars.next();
            start = next_idx + 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Flattens a raw text node: strip every line, join with spaces, normalize.
pub(crate) fn flatten_text_node(raw: &str) -> String {
    let stripped: Vec<&str> = split_lines(raw).into_iter().map(str::trim).collect();
    normalize_text(&stripped.join(" "))
}
