//! Text normalization and word tokenization.
//!
//! Document text reaches the matchers in normalized form: lowercased,
//! punctuation mapped to spaces, whitespace collapsed. Keywords go through
//! the same casing, so exact matching is case-insensitive by construction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word pattern for fuzzy tokenization: a leading letter followed by
/// alphanumerics and the characters common in skill names ("c++", "node.js").
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z][a-z0-9+#.-]*\b").expect("word regex is valid"));

/// Normalize raw extracted text for pattern matching.
///
/// Lowercases, replaces every character that is not alphanumeric, an
/// underscore, or whitespace with a space, and collapses runs of
/// whitespace to single spaces.
pub fn normalize_text(raw: &str) -> String {
    let spaced: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract word tokens from already-normalized (lowercase) text.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}
