//! # vitae-store
//!
//! Document source abstractions for the vitae CV search engine.
//!
//! The search core never talks to PDF extractors or databases directly;
//! it consumes the [`DocumentStore`] trait defined here. This crate ships
//! an in-memory implementation for tests and small corpora, plus a seeded
//! corpus builder for deterministic fixtures.

pub mod fixtures;
pub mod memory;

use async_trait::async_trait;

use vitae_core::{Document, DocumentId, Result};

pub use fixtures::CorpusBuilder;
pub use memory::InMemoryStore;

/// Source of documents to scan.
///
/// Implementations must hand back text that is already normalized
/// (lowercase, punctuation stripped, whitespace collapsed) — see
/// [`vitae_core::normalize_text`]. Enumeration failure is reported as
/// [`vitae_core::Error::DataSource`] so callers can tell "no documents"
/// apart from "nothing matched".
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document available for scanning.
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Optional human-readable excerpt for a document, used to decorate
    /// ranked results after matching. Never consumed during matching.
    async fn document_summary(&self, id: DocumentId) -> Result<Option<String>>;
}
