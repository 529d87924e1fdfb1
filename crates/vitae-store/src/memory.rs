//! In-memory document store.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::trace;

use vitae_core::{Document, DocumentId, Error, Result};

use crate::DocumentStore;

/// A [`DocumentStore`] backed by a vector of documents.
///
/// Used by tests and by the CLI after it has loaded a directory of text
/// files. The `fail_listing` switch makes the store simulate a data-source
/// outage for exercising that error path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: Vec<Document>,
    summaries: HashMap<DocumentId, String>,
    fail_listing: bool,
}

impl InMemoryStore {
    /// Create a store over the given documents.
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            summaries: HashMap::new(),
            fail_listing: false,
        }
    }

    /// Attach a summary excerpt for a document.
    pub fn with_summary(mut self, id: DocumentId, summary: impl Into<String>) -> Self {
        self.summaries.insert(id, summary.into());
        self
    }

    /// Make `list_documents` fail, simulating a collaborator outage.
    pub fn failing() -> Self {
        Self {
            documents: Vec::new(),
            summaries: HashMap::new(),
            fail_listing: true,
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        if self.fail_listing {
            return Err(Error::DataSource(
                "document listing unavailable".to_string(),
            ));
        }
        trace!(document_count = self.documents.len(), "listing documents");
        Ok(self.documents.clone())
    }

    async fn document_summary(&self, id: DocumentId) -> Result<Option<String>> {
        Ok(self.summaries.get(&id).cloned())
    }
}
