//! Line-oriented markdown-lite tokenizer.
//!
//! A single pass over the input lines drives a small state machine with
//! one open block at a time. Blank lines flush the open block, headings
//! emit immediately, and switching list kinds always closes the previous
//! list rather than merging into it. Inline `**bold**` spans are left
//! untouched; resolving them is the renderer's job (see [`crate::inline`]).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `# `, `## `, or `### ` followed by the heading text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#{1,3})\s+(.*)$").expect("valid regex"));

/// `1. `, `23. `, etc. followed by the item text.
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").expect("valid regex"));

/// `- ` or `* ` followed by the item text.
static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("valid regex"));

/// Plain bullet glyphs some model outputs use instead of `-`/`*`.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\x{2022}\x{00B7}\x{2013}\x{2014}]\s+(.*)$").expect("valid regex"));

/// One structural unit of tokenized chat text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// A heading line; never spans multiple lines.
    Heading {
        /// Heading depth, 1 through 3.
        level: u8,
        /// Heading text with the `#` prefix stripped.
        text: String,
    },
    /// A run of consecutive numbered list items.
    OrderedList {
        /// Item texts with the number prefixes stripped.
        items: Vec<String>,
    },
    /// A run of consecutive bulleted list items.
    UnorderedList {
        /// Item texts with the bullet markers stripped.
        items: Vec<String>,
    },
    /// A run of consecutive plain text lines.
    Paragraph {
        /// The raw lines, trailing whitespace trimmed.
        lines: Vec<String>,
    },
}

/// What one trimmed input line looks like to the state machine.
enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        #[allow(clippy::cast_possible_truncation)]
        let level = caps.get(1).map_or(1, |m| m.len()) as u8;
        return LineClass::Heading {
            level,
            text: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = ORDERED_RE.captures(line) {
        return LineClass::OrderedItem(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = UNORDERED_RE.captures(line).or_else(|| BULLET_RE.captures(line)) {
        return LineClass::UnorderedItem(caps.get(1).map_or("", |m| m.as_str()));
    }
    LineClass::Text(line)
}

fn flush(open: &mut Option<Block>, blocks: &mut Vec<Block>) {
    if let Some(block) = open.take() {
        blocks.push(block);
    }
}

/// Tokenizes assistant reply text into an ordered block sequence.
///
/// Every non-blank input line lands in exactly one block, in order,
/// modulo the stripped heading/list markers. An empty input produces an
/// empty sequence.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<Block> = None;

    for raw_line in input.lines() {
        let line = raw_line.trim_end();
        match classify(line) {
            LineClass::Blank => flush(&mut open, &mut blocks),
            LineClass::Heading { level, text } => {
                flush(&mut open, &mut blocks);
                blocks.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::OrderedItem(item) => match &mut open {
                Some(Block::OrderedList { items }) => items.push(item.to_string()),
                _ => {
                    flush(&mut open, &mut blocks);
                    open = Some(Block::OrderedList {
                        items: vec![item.to_string()],
                    });
                }
            },
            LineClass::UnorderedItem(item) => match &mut open {
                Some(Block::UnorderedList { items }) => items.push(item.to_string()),
                _ => {
                    flush(&mut open, &mut blocks);
                    open = Some(Block::UnorderedList {
                        items: vec![item.to_string()],
                    });
                }
            },
            LineClass::Text(line) => match &mut open {
                Some(Block::Paragraph { lines }) => lines.push(line.to_string()),
                _ => {
                    flush(&mut open, &mut blocks);
                    open = Some(Block::Paragraph {
                        lines: vec![line.to_string()],
                    });
                }
            },
        }
    }
    flush(&mut open, &mut blocks);

    blocks
}
