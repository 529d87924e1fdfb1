//! # vitae-core
//!
//! Core types, traits, and text utilities for the vitae CV search engine.
//!
//! This crate provides the foundational data structures that the matching
//! and orchestration crates depend on: document models, the keyword set
//! with stable indices, text normalization, the error taxonomy, and the
//! structured-logging field schema.

pub mod defaults;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod models;
pub mod normalize;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use keywords::KeywordSet;
pub use models::{Document, DocumentHit, DocumentId, MatchCounts, SearchResponse};
pub use normalize::{extract_words, normalize_text};
