//! # vitae-match
//!
//! String matching algorithms for the vitae CV search engine.
//!
//! This crate provides:
//! - Three exact multi-pattern matchers with identical counting semantics
//!   (KMP, Boyer-Moore, Aho-Corasick), selected through the closed
//!   [`Algorithm`] enum
//! - Levenshtein-based fuzzy matching with word-based and sliding-window
//!   strategies behind [`FuzzyConfig`]
//!
//! All matchers share one contract: given pre-normalized lowercase text
//! and lowercase keywords, return one occurrence count per keyword index.
//! Empty text or empty keywords yield zeros, never errors.

pub mod aho_corasick;
pub mod boyer_moore;
pub mod kmp;
pub mod levenshtein;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vitae_core::Error;

pub use levenshtein::{fuzzy_counts, similarity_counts, FuzzyConfig, FuzzyStrategy};

/// Exact-match algorithm selection.
///
/// A closed enumeration mapped onto the common `match_counts` contract;
/// the orchestrator selects one variant per search and dispatches through
/// [`Algorithm::match_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    AhoCorasick,
}

impl Algorithm {
    /// Count occurrences of each keyword in the text with this algorithm.
    pub fn match_counts(&self, text: &str, keywords: &[String]) -> Vec<u32> {
        match self {
            Algorithm::Kmp => kmp::match_counts(text, keywords),
            Algorithm::BoyerMoore => boyer_moore::match_counts(text, keywords),
            Algorithm::AhoCorasick => aho_corasick::match_counts(text, keywords),
        }
    }

    /// Stable wire name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer_moore",
            Algorithm::AhoCorasick => "aho_corasick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kmp" => Ok(Algorithm::Kmp),
            "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "aho_corasick" => Ok(Algorithm::AhoCorasick),
            other => Err(Error::InvalidInput(format!(
                "unknown algorithm {:?}, expected one of: kmp, boyer_moore, aho_corasick",
                other
            ))),
        }
    }
}
