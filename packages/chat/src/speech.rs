//! Speakable-text reduction for audio playback.
//!
//! Reading full markdown aloud is painful, so the reduction prefers a
//! compact enumeration over structure: bolded names first, then list
//! item labels, then a generic markup-stripping pass. The heuristic
//! order is deliberate and load-bearing; reordering it changes what
//! users hear.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;

/// Character cap for text sent to the TTS endpoint.
pub const MAX_TTS_CHARS: usize = 1000;

/// A complete `**bold**` span.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// A line that is an ordered, unordered, or bullet-glyph list item.
static LIST_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\.|[-*\x{2022}\x{00B7}\x{2013}\x{2014}])\s+(.*)$").expect("valid regex")
});

/// A fenced code block, including unclosed-fence-free interior newlines.
static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

/// Leading heading markers at the start of a line.
static HEADING_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#{1,6}\s+").expect("valid regex"));

/// Leading list markers at the start of a line.
static LIST_MARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:\d+\.|[-*\x{2022}\x{00B7}\x{2013}\x{2014}])\s+").expect("valid regex")
});

/// Emphasis and code markers, stripped while keeping the inner text.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_`]").expect("valid regex"));

/// Runs of whitespace, collapsed to a single space.
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Distinct `**bold**` span contents in order of first appearance.
fn distinct_bold_spans(input: &str) -> Vec<String> {
    let mut spans: Vec<String> = Vec::new();
    for caps in BOLD_RE.captures_iter(input) {
        let span = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        if !span.is_empty() && !spans.contains(&span) {
            spans.push(span);
        }
    }
    spans
}

/// Leading labels of all list lines, deduplicated, plus the raw list
/// line count (the shortcut needs two list *lines*, not two labels).
fn list_item_labels(input: &str) -> (usize, Vec<String>) {
    let mut line_count = 0;
    let mut labels: Vec<String> = Vec::new();
    for line in input.lines() {
        let Some(caps) = LIST_LINE_RE.captures(line.trim_end()) else {
            continue;
        };
        line_count += 1;
        let item = caps.get(1).map_or("", |m| m.as_str());
        // Keep the label, drop the " - description" tail.
        let label = match item.split_once(" - ") {
            Some((label, _)) => label,
            None => item.split_once(" \u{2014} ").map_or(item, |(label, _)| label),
        };
        let label = MARKER_RE.replace_all(label, "").trim().to_string();
        if !label.is_empty() && !labels.contains(&label) {
            labels.push(label);
        }
    }
    (line_count, labels)
}

/// Generic cleanup: strip code fences and structural markers, keep the
/// text, collapse whitespace.
fn strip_markup(input: &str) -> String {
    let no_fences = CODE_FENCE_RE.replace_all(input, " ");
    let no_headings = HEADING_MARK_RE.replace_all(&no_fences, "");
    let no_list_marks = LIST_MARK_RE.replace_all(&no_headings, "");
    let no_markers = MARKER_RE.replace_all(&no_list_marks, "");
    WS_RE.replace_all(&no_markers, " ").trim().to_string()
}

/// Reduces assistant reply text to a short speech-friendly string.
///
/// Heuristic precedence, in order:
/// 1. Two or more distinct `**bold**` spans: speak just those, joined
///    by ", " (a reply listing bolded facility names becomes
///    "Facility A, Facility B, Facility C").
/// 2. Two or more list lines: speak each item's leading label (text
///    before the first " - " or " \u{2014} " separator).
/// 3. Otherwise: strip markup and speak the remaining text.
#[must_use]
pub fn to_speakable_text(input: &str) -> String {
    let bold_spans = distinct_bold_spans(input);
    if bold_spans.len() >= 2 {
        return bold_spans.join(", ");
    }

    let (list_lines, labels) = list_item_labels(input);
    if list_lines >= 2 && !labels.is_empty() {
        return labels.join(", ");
    }

    strip_markup(input)
}

/// The payload actually sent to the TTS collaborator: emoji removed,
/// reduced to speakable form, and capped at [`MAX_TTS_CHARS`].
#[must_use]
pub fn speakable_prompt(input: &str) -> String {
    let speakable = to_speakable_text(&text::strip_emoji(input));
    if speakable.chars().count() <= MAX_TTS_CHARS {
        return speakable;
    }
    speakable.chars().take(MAX_TTS_CHARS).collect()
}
