//! Levenshtein-based fuzzy matching.
//!
//! Two strategies share the classic single-row edit-distance kernel:
//!
//! - **word-based**: tokenize the text and compare each word to the
//!   keyword; counts every word within the distance budget.
//! - **sliding-window**: slide windows of size `len ± max_distance` over
//!   the raw text, considering only word-boundary-aligned candidates.
//!   Used as a fallback for short keywords that extraction may have glued
//!   to a neighbor.
//!
//! The default hybrid policy tries word-based first and only falls back to
//! windowing when the word pass found nothing and the keyword is short.

use serde::{Deserialize, Serialize};

use vitae_core::defaults::{MAX_DISTANCE, SHORT_KEYWORD_MAX_LEN, SIMILARITY_THRESHOLD};
use vitae_core::{extract_words, Error, Result};

/// Which fuzzy strategy the orchestrator should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyStrategy {
    /// Bounded edit distance (the default path).
    Distance,
    /// Normalized similarity score with a threshold.
    Similarity,
}

/// Configuration for the fuzzy phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuzzyConfig {
    pub strategy: FuzzyStrategy,
    /// Edit-distance budget for [`FuzzyStrategy::Distance`].
    pub max_distance: usize,
    /// Minimum score (0.0 to 1.0) for [`FuzzyStrategy::Similarity`].
    pub similarity_threshold: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            strategy: FuzzyStrategy::Distance,
            max_distance: MAX_DISTANCE,
            similarity_threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl FuzzyConfig {
    /// Set the edit-distance budget.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Switch to the similarity-score strategy with the given threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.strategy = FuzzyStrategy::Similarity;
        self.similarity_threshold = threshold;
        self
    }

    /// Validate parameter ranges before any matching begins.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidInput(format!(
                "similarity_threshold must be within 0.0..=1.0, got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }

    /// Count approximate occurrences per keyword under this config.
    pub fn counts(&self, text: &str, keywords: &[String]) -> Vec<u32> {
        match self.strategy {
            FuzzyStrategy::Distance => fuzzy_counts(text, keywords, self.max_distance),
            FuzzyStrategy::Similarity => {
                similarity_counts(text, keywords, self.similarity_threshold)
            }
        }
    }
}

/// Classic edit distance (unit-cost insert/delete/substitute).
///
/// Single-row dynamic programming; the shorter string is always the inner
/// dimension, so space is O(min(|a|, |b|)).
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

fn distance_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string as the row.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if inner.is_empty() {
        return outer.len();
    }

    let mut previous: Vec<usize> = (0..=inner.len()).collect();
    let mut current = vec![0usize; inner.len() + 1];

    for (i, &c1) in outer.iter().enumerate() {
        current[0] = i + 1;
        for (j, &c2) in inner.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(c1 != c2);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[inner.len()]
}

/// Count words in the text within `max_distance` edits of the keyword.
pub fn word_match_count(text: &str, keyword: &str, max_distance: usize) -> u32 {
    let keyword_chars: Vec<char> = keyword.chars().collect();
    let mut matches = 0u32;
    for word in extract_words(text) {
        let word_chars: Vec<char> = word.chars().collect();
        if distance_chars(&keyword_chars, &word_chars) <= max_distance {
            matches += 1;
        }
    }
    matches
}

/// Count fuzzy hits with sliding windows of size `len ± max_distance`.
///
/// A candidate substring only qualifies when bounded by non-alphanumeric
/// characters or the text edges. On the first hit for a given window size
/// the inner scan stops, which suppresses overlapping hits — preserved
/// observed behavior of this fallback.
pub fn window_match_count(text: &str, keyword: &str, max_distance: usize) -> u32 {
    let chars: Vec<char> = text.chars().collect();
    let keyword_chars: Vec<char> = keyword.chars().collect();
    let text_len = chars.len();
    let keyword_len = keyword_chars.len();

    let min_window = keyword_len.saturating_sub(max_distance).max(1);
    let max_window = keyword_len + max_distance;

    let mut matches = 0u32;

    for window in min_window..=max_window {
        if window > text_len {
            break;
        }
        for i in 0..=(text_len - window) {
            // Word-boundary constraint on both sides.
            if i > 0 && chars[i - 1].is_alphanumeric() {
                continue;
            }
            if i + window < text_len && chars[i + window].is_alphanumeric() {
                continue;
            }

            if distance_chars(&keyword_chars, &chars[i..i + window]) <= max_distance {
                matches += 1;
                break;
            }
        }
    }

    matches
}

/// Hybrid policy: word-based first; sliding-window fallback only when the
/// word pass found nothing and the keyword is short.
pub fn hybrid_match_count(text: &str, keyword: &str, max_distance: usize) -> u32 {
    let word_matches = word_match_count(text, keyword, max_distance);

    if word_matches == 0 && keyword.chars().count() <= SHORT_KEYWORD_MAX_LEN {
        return window_match_count(text, keyword, max_distance);
    }

    word_matches
}

/// Count approximate occurrences of each keyword using the hybrid policy.
///
/// Empty keywords contribute zero. Text and keywords are expected to be
/// pre-lowercased by the caller.
pub fn fuzzy_counts(text: &str, keywords: &[String], max_distance: usize) -> Vec<u32> {
    keywords
        .iter()
        .map(|keyword| {
            if keyword.is_empty() {
                0
            } else {
                hybrid_match_count(text, keyword, max_distance)
            }
        })
        .collect()
}

/// Normalized similarity: `1 − distance / max(len)`, 1.0 for two empties.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let max_len = a_len.max(b_len);
    1.0 - (distance(a, b) as f64 / max_len as f64)
}

/// Count words scoring at or above the similarity threshold per keyword.
///
/// Alternate strategy with the same input contract as [`fuzzy_counts`];
/// not on the default orchestration path.
pub fn similarity_counts(text: &str, keywords: &[String], threshold: f64) -> Vec<u32> {
    let words = extract_words(text);
    keywords
        .iter()
        .map(|keyword| {
            if keyword.is_empty() {
                return 0;
            }
            words
                .iter()
                .filter(|word| similarity_score(keyword, word) >= threshold)
                .count() as u32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_base_cases() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_distance_kitten_sitting() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance_symmetry() {
        assert_eq!(distance("golang", "golnag"), distance("golnag", "golang"));
    }

    #[test]
    fn test_distance_identical() {
        assert_eq!(distance("python", "python"), 0);
    }

    #[test]
    fn test_word_match_counts_typo() {
        // "pyton" is one deletion away from "python".
        assert_eq!(word_match_count("a pyton developer", "python", 1), 1);
        assert_eq!(word_match_count("a pyton developer", "python", 0), 0);
    }

    #[test]
    fn test_word_match_counts_every_close_word() {
        assert_eq!(word_match_count("sal sql sqll", "sql", 1), 3);
    }

    #[test]
    fn test_window_requires_word_boundary() {
        // "sq l" has window candidates; "xsqlx" is glued to alphanumerics
        // on both sides and must not match.
        assert_eq!(window_match_count("xsqlx", "sql", 1), 0);
        assert!(window_match_count("knows sq here", "sql", 1) > 0);
    }

    #[test]
    fn test_window_counts_at_most_one_per_size() {
        // Two separate near-misses, but each window size stops at its
        // first hit by design. Window sizes 1..=3 cap the count at 3.
        assert!(window_match_count("go gp", "go", 1) <= 3);
    }

    #[test]
    fn test_hybrid_prefers_word_matches() {
        // Word pass finds a hit, so no window fallback even though the
        // keyword is short.
        assert_eq!(hybrid_match_count("sql server", "sql", 1), 1);
    }

    #[test]
    fn test_hybrid_no_fallback_for_long_keywords() {
        // 10 chars > fallback cap: zero word matches stay zero.
        assert_eq!(hybrid_match_count("kub ernetes", "kubernetes", 1), 0);
    }

    #[test]
    fn test_fuzzy_counts_skips_empty_keyword() {
        let keywords = vec!["".to_string(), "sql".to_string()];
        assert_eq!(fuzzy_counts("sql sql", &keywords, 1), vec![0, 2]);
    }

    #[test]
    fn test_fuzzy_monotonic_in_max_distance() {
        let text = "pyton pithon python";
        let keywords = vec!["python".to_string()];
        let mut previous = 0;
        for max_distance in 0..=3 {
            let count = fuzzy_counts(text, &keywords, max_distance)[0];
            assert!(
                count >= previous,
                "count dropped from {} to {} at distance {}",
                previous,
                count,
                max_distance
            );
            previous = count;
        }
    }

    #[test]
    fn test_similarity_score_bounds() {
        assert_eq!(similarity_score("", ""), 1.0);
        assert_eq!(similarity_score("", "abc"), 0.0);
        assert!((similarity_score("python", "python") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_counts_threshold() {
        let keywords = vec!["python".to_string()];
        // "pyton" scores 1 - 1/6 ≈ 0.83.
        assert_eq!(similarity_counts("pyton", &keywords, 0.8), vec![1]);
        assert_eq!(similarity_counts("pyton", &keywords, 0.9), vec![0]);
    }

    #[test]
    fn test_config_validate_rejects_bad_threshold() {
        let config = FuzzyConfig::default().with_similarity_threshold(1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_dispatch() {
        let keywords = vec!["sql".to_string()];
        let distance_config = FuzzyConfig::default();
        let similarity_config = FuzzyConfig::default().with_similarity_threshold(0.6);
        assert_eq!(distance_config.counts("sal", &keywords), vec![1]);
        assert_eq!(similarity_config.counts("sal", &keywords), vec![1]);
    }
}
