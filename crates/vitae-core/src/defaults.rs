//! Centralized default constants for the vitae system.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// SEARCH
// =============================================================================

/// Default number of ranked documents returned by a search.
pub const TOP_N: usize = 5;

/// Default cap on concurrently scanned documents within a phase.
pub const MAX_CONCURRENCY: usize = 8;

// =============================================================================
// FUZZY MATCHING
// =============================================================================

/// Default edit-distance budget for the fuzzy fallback.
pub const MAX_DISTANCE: usize = 1;

/// Keywords at most this long qualify for the sliding-window fallback when
/// word-based fuzzy matching finds nothing. Short keywords are the ones
/// likely to be glued to neighbors by extraction artifacts.
pub const SHORT_KEYWORD_MAX_LEN: usize = 6;

/// Default threshold for the similarity-score fuzzy strategy.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

// =============================================================================
// EXACT MATCHING
// =============================================================================

/// Alphabet size for the Boyer-Moore last-occurrence table. Characters
/// outside the 7-bit range share class 0.
pub const ALPHABET_SIZE: usize = 128;
