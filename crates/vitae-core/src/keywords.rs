//! Keyword parsing and the fixed-index keyword set.
//!
//! A search request supplies keywords as a single comma-separated string.
//! The set assigns each distinct keyword a stable index at parse time;
//! every count vector produced during a search is addressed by these
//! indices, across both the exact and the fuzzy phase.

use std::collections::HashSet;

/// Deduplicated, lowercased keywords with stable indices.
///
/// Duplicates are dropped keeping the first occurrence, so indices are
/// deterministic for a given input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Parse a comma-separated keyword string.
    ///
    /// Each fragment is trimmed and lowercased; empty fragments are
    /// dropped. `"Python, SQL ,python,"` parses to `["python", "sql"]`.
    pub fn parse(csv: &str) -> Self {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for fragment in csv.split(',') {
            let keyword = fragment.trim().to_lowercase();
            if keyword.is_empty() {
                continue;
            }
            if seen.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }
        Self { keywords }
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// True if no keywords survived parsing.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// All keywords in index order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Keyword at the given index.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.keywords.get(idx).map(String::as_str)
    }
}
