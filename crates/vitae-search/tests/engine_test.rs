//! End-to-end tests for the two-phase search engine over an in-memory
//! document store.

use std::sync::Arc;

use vitae_core::Document;
use vitae_search::{Algorithm, SearchConfig, SearchEngine};
use vitae_store::{CorpusBuilder, InMemoryStore};

fn engine(documents: Vec<Document>) -> SearchEngine<InMemoryStore> {
    SearchEngine::new(Arc::new(InMemoryStore::new(documents)))
}

#[tokio::test]
async fn test_end_to_end_exact_and_residual_fuzzy() {
    // Classic scenario: "golang" is found nowhere exactly, goes to the
    // fuzzy phase, finds nothing there either, and doc 2 drops out with a
    // zero total.
    let doc1 = Document::new("data engineer", "python developer with sql skills");
    let doc2 = Document::new("backend", "java developer");
    let doc1_id = doc1.id;

    let response = engine(vec![doc1, doc2])
        .search("python,sql,golang", &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(response.total_documents, 2);
    assert_eq!(response.hits.len(), 1);

    let hit = &response.hits[0];
    assert_eq!(hit.document_id, doc1_id);
    assert_eq!(hit.counts, vec![1, 1, 0]);
    assert_eq!(hit.total, 2);
}

#[tokio::test]
async fn test_fuzzy_counts_land_on_original_keyword_index() {
    // "qx" matches nothing exactly; the fuzzy phase finds "qz" one edit
    // away and the count must land at index 0, not at a residual-local
    // index.
    let doc = Document::new("ops", "qz sql");
    let response = engine(vec![doc])
        .search("qx,sql", &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].counts, vec![1, 1]);
    assert_eq!(response.hits[0].total, 2);
}

#[tokio::test]
async fn test_fuzzy_phase_skipped_when_all_keywords_found() {
    let docs = vec![
        Document::new("a", "python everywhere"),
        Document::new("b", "sql everywhere"),
    ];
    let response = engine(docs)
        .search("python,sql", &SearchConfig::default())
        .await
        .unwrap();

    // Each keyword was found in some document, so no fuzzy time accrues.
    assert_eq!(response.fuzzy_elapsed_ms, 0);
    assert_eq!(response.hits.len(), 2);
}

#[tokio::test]
async fn test_all_algorithms_agree_end_to_end() {
    let build_docs = || {
        vec![
            Document::new("one", "python developer with sql skills and more sql"),
            Document::new("two", "java and javascript developer"),
            Document::new("three", "golang golang golang"),
        ]
    };

    let mut responses = Vec::new();
    for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick] {
        let config = SearchConfig::default().with_algorithm(algorithm);
        let response = engine(build_docs())
            .search("java,sql,golang", &config)
            .await
            .unwrap();
        let totals: Vec<u64> = response.hits.iter().map(|h| h.total).collect();
        responses.push(totals);
    }

    assert_eq!(responses[0], responses[1]);
    assert_eq!(responses[1], responses[2]);
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let corpus = CorpusBuilder::new().with_seed(11).with_documents(12).build();
    let engine = engine(corpus);
    let config = SearchConfig::default().with_top_n(20);

    let first = engine.search("python,sql,rustt", &config).await.unwrap();
    let second = engine.search("python,sql,rustt", &config).await.unwrap();

    let project = |hits: &[vitae_core::DocumentHit]| {
        hits.iter()
            .map(|h| (h.document_id, h.counts.clone(), h.total))
            .collect::<Vec<_>>()
    };
    assert_eq!(project(&first.hits), project(&second.hits));
}

#[tokio::test]
async fn test_top_n_zero_yields_no_hits() {
    let docs = vec![Document::new("match", "sql sql sql")];
    let response = engine(docs)
        .search("sql", &SearchConfig::default().with_top_n(0))
        .await
        .unwrap();

    assert!(response.hits.is_empty());
    assert_eq!(response.total_documents, 1);
}

#[tokio::test]
async fn test_top_n_larger_than_result_count_returns_all() {
    let docs = vec![
        Document::new("a", "sql"),
        Document::new("b", "sql sql"),
        Document::new("c", "nothing relevant"),
    ];
    let response = engine(docs)
        .search("sql", &SearchConfig::default().with_top_n(100))
        .await
        .unwrap();
    assert_eq!(response.hits.len(), 2);
}

#[tokio::test]
async fn test_ranking_descending_with_id_tie_break() {
    let doc_a = Document::new("twice", "sql sql");
    let doc_b = Document::new("tie1", "sql");
    let doc_c = Document::new("tie2", "sql");
    let top_id = doc_a.id;
    let (low_id, high_id) = if doc_b.id < doc_c.id {
        (doc_b.id, doc_c.id)
    } else {
        (doc_c.id, doc_b.id)
    };

    let response = engine(vec![doc_a, doc_b, doc_c])
        .search("sql", &SearchConfig::default())
        .await
        .unwrap();

    let ids: Vec<_> = response.hits.iter().map(|h| h.document_id).collect();
    assert_eq!(ids, vec![top_id, low_id, high_id]);
}

#[tokio::test]
async fn test_summaries_decorate_ranked_hits() {
    let doc = Document::new("analyst", "sql reporting");
    let id = doc.id;
    let store = InMemoryStore::new(vec![doc]).with_summary(id, "Senior analyst, 4 years");
    let engine = SearchEngine::new(Arc::new(store));

    let response = engine
        .search("sql", &SearchConfig::default())
        .await
        .unwrap();
    assert_eq!(
        response.hits[0].summary.as_deref(),
        Some("Senior analyst, 4 years")
    );
}

#[tokio::test]
async fn test_duplicate_keywords_collapse_to_one_index() {
    let docs = vec![Document::new("dup", "sql sql")];
    let response = engine(docs)
        .search("SQL, sql ,sql", &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(response.hits[0].counts, vec![2]);
}

#[tokio::test]
async fn test_bounded_concurrency_still_scans_everything() {
    let corpus = CorpusBuilder::new().with_seed(3).with_documents(30).build();
    let expected = corpus.len();
    let config = SearchConfig::default()
        .with_max_concurrency(2)
        .with_top_n(50);

    let response = engine(corpus).search("python,sql,docker", &config).await.unwrap();
    assert_eq!(response.total_documents, expected);
}
