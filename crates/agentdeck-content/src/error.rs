//! Error types for content loading

use thiserror::Error;

/// Failures while fetching the content bundle.
///
/// These never reach lookups: a failed load leaves an empty bundle behind.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading the bundle from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching the bundle over HTTP failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bundle was not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ContentError>;
