//! # vitae-search
//!
//! Two-phase search orchestration for the vitae CV search engine.
//!
//! This crate combines the exact matchers and the fuzzy fallback from
//! `vitae-match` over a `vitae-store` document source:
//!
//! 1. The configured exact matcher scans every document and per-keyword
//!    "found anywhere" flags are reduced across the corpus.
//! 2. Keywords found nowhere are re-scanned with the Levenshtein fuzzy
//!    matcher; its counts merge additively into the same keyword indices.
//! 3. Documents are ranked by total count and truncated to top-N.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitae_search::{SearchConfig, SearchEngine};
//! use vitae_store::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new(documents));
//! let engine = SearchEngine::new(store);
//! let response = engine
//!     .search("python,sql,golang", &SearchConfig::default())
//!     .await?;
//! ```

pub mod config;
pub mod engine;

// Re-export core types
pub use vitae_core::*;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use vitae_match::{Algorithm, FuzzyConfig, FuzzyStrategy};
