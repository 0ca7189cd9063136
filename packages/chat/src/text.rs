//! Small text cleanup helpers shared by rendering and speech.

use std::sync::LazyLock;

use regex::Regex;

/// Emoji and pictograph codepoints the backend occasionally emits in
/// suggested queries and replies.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}]").expect("valid regex")
});

/// Removes emoji, leaving all other text untouched.
#[must_use]
pub fn strip_emoji(input: &str) -> String {
    EMOJI_RE.replace_all(input, "").to_string()
}
