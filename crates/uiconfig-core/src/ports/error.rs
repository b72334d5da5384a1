//! Error types for key/value store port operations.

use thiserror::Error;

/// Errors from key/value store operations.
///
/// These are domain-level errors the facade reacts to. Implementation
/// specific errors (HTTP, JSON) are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No value is stored under the key.
    #[error("Not found: {collection}/{key}")]
    NotFound {
        /// Collection that was searched
        collection: String,
        /// Key that was not found
        key: String,
    },

    /// The supplied etag does not match the stored revision.
    #[error("Conflict: {collection}/{key} was modified by another writer")]
    Conflict {
        /// Collection of the rejected write
        collection: String,
        /// Key of the rejected write
        key: String,
    },

    /// The store could not be reached or failed to serve the request.
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Description of the failure
        message: String,
    },

    /// The store answered with something that could not be understood.
    #[error("Invalid storage response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client is misconfigured (e.g. a bad base URL).
    #[error("Storage configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for key/value store operations.
pub type StoreResult<T> = Result<T, StoreError>;
