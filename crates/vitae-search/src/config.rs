//! Search configuration.

use serde::{Deserialize, Serialize};

use vitae_core::defaults::{MAX_CONCURRENCY, TOP_N};
use vitae_core::{Error, Result};
use vitae_match::{Algorithm, FuzzyConfig};

/// Configuration for a two-phase search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exact-match algorithm for phase one.
    pub algorithm: Algorithm,
    /// Number of ranked documents to return. Zero is valid and yields an
    /// empty hit list.
    pub top_n: usize,
    /// Fuzzy-phase parameters.
    pub fuzzy: FuzzyConfig,
    /// Cap on concurrently scanned documents within a phase.
    pub max_concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kmp,
            top_n: TOP_N,
            fuzzy: FuzzyConfig::default(),
            max_concurrency: MAX_CONCURRENCY,
        }
    }
}

impl SearchConfig {
    /// Set the exact-match algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the number of results to return.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the fuzzy-phase parameters.
    pub fn with_fuzzy(mut self, fuzzy: FuzzyConfig) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set the concurrency cap.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max;
        self
    }

    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `VITAE_ALGORITHM` | `kmp` | Exact-match algorithm |
    /// | `VITAE_TOP_N` | `5` | Results to return |
    /// | `VITAE_MAX_DISTANCE` | `1` | Fuzzy edit-distance budget |
    /// | `VITAE_MAX_CONCURRENCY` | `8` | Parallel documents per phase |
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("VITAE_ALGORITHM") {
            if let Ok(algorithm) = value.parse() {
                config.algorithm = algorithm;
            }
        }
        if let Some(top_n) = std::env::var("VITAE_TOP_N")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.top_n = top_n;
        }
        if let Some(max_distance) = std::env::var("VITAE_MAX_DISTANCE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.fuzzy.max_distance = max_distance;
        }
        if let Some(max) = std::env::var("VITAE_MAX_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.max_concurrency = max.max(1);
        }

        config
    }

    /// Validate the configuration before any matching work begins.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(Error::InvalidInput(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        self.fuzzy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = SearchConfig::default()
            .with_algorithm(Algorithm::AhoCorasick)
            .with_top_n(10)
            .with_max_concurrency(2);
        assert_eq!(config.algorithm, Algorithm::AhoCorasick);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.max_concurrency, 2);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = SearchConfig::default().with_max_concurrency(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_top_n_zero_is_valid() {
        // A zero-result request is a boundary, not an error.
        assert!(SearchConfig::default().with_top_n(0).validate().is_ok());
    }

    #[test]
    fn test_bad_fuzzy_threshold_rejected() {
        let config = SearchConfig::default()
            .with_fuzzy(FuzzyConfig::default().with_similarity_threshold(2.0));
        assert!(config.validate().is_err());
    }
}
