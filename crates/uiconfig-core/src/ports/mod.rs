//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no transport details and use only plain data types.
//!
//! # Design Rules
//!
//! - No HTTP types in any signature
//! - Bodies cross the port as JSON text; encoding is the facade's job
//! - Store errors are mapped to [`StoreError`] by the adapter

mod error;
mod in_memory_store;
mod key_value_store;

use thiserror::Error;

pub use error::{StoreError, StoreResult};
pub use in_memory_store::InMemoryKeyValueStore;
pub use key_value_store::{KeyValueStorePort, MATCH_ANY_ETAG, StoreStatus, StoredValue};

#[cfg(test)]
pub use key_value_store::MockKeyValueStorePort;

/// Errors returned by the settings facade.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The key/value store reported a failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A body could not be encoded, or stored data could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input (e.g. an empty id).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether the store reported the item as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound { .. }))
    }

    /// Whether the store rejected a write because of a stale etag.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Store(StoreError::Conflict { .. }))
    }
}
