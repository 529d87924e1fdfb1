//! Data model for documents and search results.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a document in the corpus.
pub type DocumentId = Uuid;

/// Per-keyword occurrence counts, one entry per keyword index.
pub type MatchCounts = Vec<u32>;

/// A document to scan: opaque id, pass-through metadata, and a normalized
/// text body (lowercase, punctuation stripped, whitespace collapsed).
///
/// The matching core only consumes `text`; `role` and `path` travel through
/// the engine untouched and reappear on the corresponding [`DocumentHit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Role tag for the application (e.g. "backend engineer").
    pub role: String,
    /// Original file path or handle, if any.
    pub path: Option<String>,
    /// Normalized text body.
    pub text: String,
}

impl Document {
    /// Create a document with a fresh id.
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: role.into(),
            path: None,
            text: text.into(),
        }
    }

    /// Attach a source path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// One ranked document in a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHit {
    pub document_id: DocumentId,
    pub role: String,
    pub path: Option<String>,
    /// Per-keyword counts at the keyword set's fixed indices.
    pub counts: Vec<u32>,
    /// Sum of `counts`, computed once the merged vector is final.
    pub total: u64,
    /// Optional excerpt attached after ranking.
    pub summary: Option<String>,
}

impl DocumentHit {
    /// Build a hit from a document's metadata and its count vector.
    pub fn from_counts(doc: &Document, counts: Vec<u32>) -> Self {
        let total = counts.iter().map(|&c| u64::from(c)).sum();
        Self {
            document_id: doc.id,
            role: doc.role.clone(),
            path: doc.path.clone(),
            counts,
            total,
            summary: None,
        }
    }
}

/// Result of a full two-phase search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked hits, highest total first, truncated to the requested N.
    pub hits: Vec<DocumentHit>,
    /// Number of documents the source returned for scanning.
    pub total_documents: usize,
    /// Wall-clock time of the exact phase in milliseconds.
    pub exact_elapsed_ms: u64,
    /// Wall-clock time of the fuzzy phase in milliseconds (0 if skipped).
    pub fuzzy_elapsed_ms: u64,
}

impl SearchResponse {
    /// Response for the case where the source produced no documents.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            total_documents: 0,
            exact_elapsed_ms: 0,
            fuzzy_elapsed_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_sums_total() {
        let doc = Document::new("data engineer", "sql python sql");
        let hit = DocumentHit::from_counts(&doc, vec![2, 1, 0]);
        assert_eq!(hit.total, 3);
        assert_eq!(hit.role, "data engineer");
    }

    #[test]
    fn test_from_counts_all_zero() {
        let doc = Document::new("qa", "testing");
        let hit = DocumentHit::from_counts(&doc, vec![0, 0]);
        assert_eq!(hit.total, 0);
    }

    #[test]
    fn test_empty_response() {
        let resp = SearchResponse::empty();
        assert!(resp.hits.is_empty());
        assert_eq!(resp.total_documents, 0);
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let doc = Document::new("devops", "kubernetes terraform").with_path("/cv/devops.pdf");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, doc.id);
        assert_eq!(back.path.as_deref(), Some("/cv/devops.pdf"));
    }
}
