//! Internal error types for storage-adapter requests.
//!
//! These errors are internal to `uiconfig-storage` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for storage-adapter requests.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors related to storage-adapter requests.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The service answered with a non-success status.
    #[error("Storage adapter request {method} {url} failed with status {status}")]
    RequestFailed {
        /// HTTP method of the request
        method: &'static str,
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The service answered with a body of the wrong shape.
    #[error("Invalid response from storage adapter: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The base URL cannot have path segments appended.
    #[error("Storage adapter base URL cannot be used as a base: {url}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
