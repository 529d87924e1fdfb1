//! Structured logging field name constants for vitae.
//!
//! All crates use these constants for consistent structured logging fields
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Search completions, lifecycle events |
//! | DEBUG | Decision points, phase transitions, config choices |
//! | TRACE | Per-document iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "match", "store", "cli"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "engine", "exact_phase", "fuzzy_phase", "memory_store"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "match_counts", "fuzzy_counts", "list_documents"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Document UUID being operated on.
pub const DOCUMENT_ID: &str = "document_id";

/// Exact-match algorithm selected for the search.
pub const ALGORITHM: &str = "algorithm";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of ranked hits returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of documents scanned in a phase.
pub const DOCUMENT_COUNT: &str = "document_count";

/// Number of keywords in the parsed set.
pub const KEYWORD_COUNT: &str = "keyword_count";

// ─── Search-specific fields ────────────────────────────────────────────────

/// Number of keywords found by the exact phase anywhere in the corpus.
pub const EXACT_FOUND: &str = "exact_found";

/// Number of residual keywords handed to the fuzzy phase.
pub const FUZZY_KEYWORDS: &str = "fuzzy_keywords";

/// Edit-distance budget used by the fuzzy phase.
pub const MAX_DISTANCE: &str = "max_distance";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
