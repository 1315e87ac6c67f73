//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during a search-and-extract run.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Requested search engine is not supported.
    #[error("Unsupported engine: '{0}' (expected google, duck, or bing)")]
    UnsupportedEngine(String),

    /// Page fetch failed at the transport/HTTP layer.
    #[error("Page fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to parse a selector.
    #[error("Failed to parse selector: {0}")]
    Parse(String),

    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
