//! Error types for vitae.

use thiserror::Error;

/// Result type alias using vitae's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vitae operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input rejected at the API boundary (unknown algorithm,
    /// empty keyword list, out-of-range fuzzy parameters).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document source could not enumerate any documents. Distinct
    /// from a successful search that simply matched nothing.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
