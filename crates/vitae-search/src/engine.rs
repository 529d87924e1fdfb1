//! Two-phase search orchestration.
//!
//! Phase one runs the configured exact matcher over every document and
//! reduces a per-keyword "found anywhere" set. Keywords that no document
//! matched exactly become the residual set; phase two re-scans all
//! documents with the fuzzy matcher restricted to those residual keywords
//! and adds its counts into the same index positions. Documents are then
//! ranked by total count and truncated to the requested N.
//!
//! Each phase is a pure map over independent documents: workers return
//! `(document_id, counts)` pairs and all merging happens in the reducer,
//! so there is no shared mutable state while documents are in flight. The
//! fuzzy phase only starts after the exact reduce has finished.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use vitae_core::{Document, DocumentHit, DocumentId, Error, KeywordSet, Result, SearchResponse};
use vitae_store::DocumentStore;

use crate::config::SearchConfig;

/// Per-document counting function run by phase workers.
type CountFn = Arc<dyn Fn(&str) -> Vec<u32> + Send + Sync>;

/// Search engine over a document store.
pub struct SearchEngine<S> {
    store: Arc<S>,
}

impl<S> SearchEngine<S>
where
    S: DocumentStore + 'static,
{
    /// Create a new engine over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run a two-phase search for the given comma-separated keywords.
    ///
    /// A document source that cannot enumerate any documents yields the
    /// explicit zero-document response rather than an error; use
    /// [`SearchEngine::search_strict`] to get the error instead.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the keyword string normalizes to
    /// nothing or the configuration is out of range.
    #[instrument(skip_all, fields(algorithm = %config.algorithm))]
    pub async fn search(&self, keyword_csv: &str, config: &SearchConfig) -> Result<SearchResponse> {
        config.validate()?;
        let keywords = Self::parse_keywords(keyword_csv)?;

        let documents = match self.store.list_documents().await {
            Ok(documents) => documents,
            Err(Error::DataSource(msg)) => {
                warn!(error = %msg, "document source returned no data");
                return Ok(SearchResponse::empty());
            }
            Err(e) => return Err(e),
        };

        self.run_phases(keywords, documents, config).await
    }

    /// Like [`SearchEngine::search`], but a document source failure is
    /// propagated as [`Error::DataSource`].
    pub async fn search_strict(
        &self,
        keyword_csv: &str,
        config: &SearchConfig,
    ) -> Result<SearchResponse> {
        config.validate()?;
        let keywords = Self::parse_keywords(keyword_csv)?;
        let documents = self.store.list_documents().await?;
        self.run_phases(keywords, documents, config).await
    }

    fn parse_keywords(keyword_csv: &str) -> Result<KeywordSet> {
        let keywords = KeywordSet::parse(keyword_csv);
        if keywords.is_empty() {
            return Err(Error::InvalidInput(
                "keyword string contains no usable keywords".to_string(),
            ));
        }
        Ok(keywords)
    }

    async fn run_phases(
        &self,
        keywords: KeywordSet,
        documents: Vec<Document>,
        config: &SearchConfig,
    ) -> Result<SearchResponse> {
        let total_documents = documents.len();
        let keyword_count = keywords.len();
        let keyword_vec: Arc<Vec<String>> = Arc::new(keywords.keywords().to_vec());

        // ── Exact phase ────────────────────────────────────────────────
        let exact_start = Instant::now();
        let algorithm = config.algorithm;
        let exact_keywords = Arc::clone(&keyword_vec);
        let exact_fn: CountFn =
            Arc::new(move |text: &str| algorithm.match_counts(text, &exact_keywords));
        let exact_results =
            parallel_counts(&documents, config.max_concurrency, exact_fn).await?;

        // Every document owns a count vector, including skipped ones.
        let mut counts_by_doc: HashMap<DocumentId, Vec<u32>> = documents
            .iter()
            .map(|doc| (doc.id, vec![0u32; keyword_count]))
            .collect();
        let mut found = vec![false; keyword_count];

        for (id, counts) in exact_results {
            for (idx, &count) in counts.iter().enumerate() {
                if count > 0 {
                    found[idx] = true;
                }
            }
            if let Some(slot) = counts_by_doc.get_mut(&id) {
                for (slot_count, count) in slot.iter_mut().zip(counts) {
                    *slot_count += count;
                }
            }
        }
        let exact_elapsed_ms = exact_start.elapsed().as_millis() as u64;

        let residual: Vec<usize> = (0..keyword_count).filter(|&idx| !found[idx]).collect();
        debug!(
            exact_found = keyword_count - residual.len(),
            fuzzy_keywords = residual.len(),
            duration_ms = exact_elapsed_ms,
            "exact phase complete"
        );

        // ── Fuzzy phase ────────────────────────────────────────────────
        // Runs only for keywords no document matched exactly, and only
        // after the found-set reduce above is complete.
        let mut fuzzy_elapsed_ms = 0u64;
        if !residual.is_empty() {
            let fuzzy_start = Instant::now();
            let residual_keywords: Vec<String> = residual
                .iter()
                .map(|&idx| keyword_vec[idx].clone())
                .collect();
            let fuzzy = config.fuzzy;
            let fuzzy_fn: CountFn =
                Arc::new(move |text: &str| fuzzy.counts(text, &residual_keywords));
            let fuzzy_results =
                parallel_counts(&documents, config.max_concurrency, fuzzy_fn).await?;

            for (id, counts) in fuzzy_results {
                if let Some(slot) = counts_by_doc.get_mut(&id) {
                    // Added, not assigned: stays correct if the fuzzy
                    // phase ever overlaps exact-found keywords.
                    for (&original_idx, count) in residual.iter().zip(counts) {
                        slot[original_idx] += count;
                    }
                }
            }
            fuzzy_elapsed_ms = fuzzy_start.elapsed().as_millis() as u64;
        }

        // ── Rank and truncate ──────────────────────────────────────────
        let mut hits: Vec<DocumentHit> = documents
            .iter()
            .filter_map(|doc| {
                let counts = counts_by_doc.remove(&doc.id)?;
                let hit = DocumentHit::from_counts(doc, counts);
                (hit.total > 0).then_some(hit)
            })
            .collect();

        // Equal totals break ties by document id for a deterministic order.
        hits.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.document_id.cmp(&b.document_id))
        });
        hits.truncate(config.top_n);

        self.attach_summaries(&mut hits).await;

        info!(
            algorithm = %config.algorithm,
            document_count = total_documents,
            keyword_count,
            result_count = hits.len(),
            duration_ms = exact_elapsed_ms + fuzzy_elapsed_ms,
            "search complete"
        );

        Ok(SearchResponse {
            hits,
            total_documents,
            exact_elapsed_ms,
            fuzzy_elapsed_ms,
        })
    }

    /// Decorate ranked hits with store summaries. Best-effort: a failed
    /// lookup leaves the hit without a summary and never fails the search.
    async fn attach_summaries(&self, hits: &mut [DocumentHit]) {
        let lookups = hits
            .iter()
            .map(|hit| self.store.document_summary(hit.document_id));
        let summaries = futures::future::join_all(lookups).await;

        for (hit, summary) in hits.iter_mut().zip(summaries) {
            match summary {
                Ok(summary) => hit.summary = summary,
                Err(e) => {
                    debug!(document_id = %hit.document_id, error = %e, "summary lookup failed");
                }
            }
        }
    }
}

/// Map a counting function over all documents with bounded concurrency.
///
/// Documents with empty text are skipped (they keep their all-zero vector
/// in the reducer). Matching itself is CPU-bound and runs on the blocking
/// pool; results arrive in completion order, which is fine because the
/// caller's merge is commutative.
async fn parallel_counts(
    documents: &[Document],
    max_concurrency: usize,
    count_fn: CountFn,
) -> Result<Vec<(DocumentId, Vec<u32>)>> {
    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let mut tasks: JoinSet<Result<(DocumentId, Vec<u32>)>> = JoinSet::new();

    for doc in documents {
        if doc.text.is_empty() {
            continue;
        }
        let id = doc.id;
        let text = doc.text.clone();
        let count_fn = Arc::clone(&count_fn);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| Error::Internal(format!("semaphore closed: {e}")))?;
            tokio::task::spawn_blocking(move || (id, count_fn(&text)))
                .await
                .map_err(|e| Error::Internal(format!("matching task failed: {e}")))
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let pair = joined.map_err(|e| Error::Internal(format!("task join failed: {e}")))??;
        results.push(pair);
    }
    Ok(results)
}
