//! Inline emphasis resolution for rendering block text.
//!
//! Block text keeps `**bold**` markers literal; a renderer calls
//! [`split_emphasis`] when it actually displays the text. An unmatched
//! trailing `**` never pairs up, so its text stays plain.

use std::sync::LazyLock;

use regex::Regex;

/// A complete `**bold**` span (non-greedy, at least one character).
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// One run of displayed text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Text rendered as-is.
    Plain(String),
    /// Text rendered with emphasis, markers stripped.
    Bold(String),
}

/// Splits text into alternating plain and bold spans.
///
/// Empty plain runs between adjacent bold spans are dropped, so the
/// output contains no empty spans.
#[must_use]
pub fn split_emphasis(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_RE.captures_iter(text) {
        let whole = caps.get(0).expect("capture 0 always present");
        let inner = caps.get(1).map_or("", |m| m.as_str());
        if whole.start() > cursor {
            spans.push(InlineSpan::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(InlineSpan::Bold(inner.to_string()));
        cursor = whole.end();
    }
    if cursor < text.len() {
        spans.push(InlineSpan::Plain(text[cursor..].to_string()));
    }

    spans
}
