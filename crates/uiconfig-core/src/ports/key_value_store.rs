//! Key/value store port.
//!
//! This port is the facade's only view of persistence: a set of named
//! collections holding JSON text under string keys, each revision tagged
//! with an opaque etag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreResult;

/// Etag that disables the concurrency check on update.
pub const MATCH_ANY_ETAG: &str = "*";

/// A value as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    /// Key within the collection.
    pub key: String,
    /// Stored JSON text.
    pub data: String,
    /// Concurrency token of this revision.
    pub etag: String,
}

/// Health of the store as reported by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatus {
    pub healthy: bool,
    /// Human-readable status line.
    pub message: String,
}

/// Client for a collection-based key/value store.
///
/// # Contract
///
/// - `get` and `delete` fail with `StoreError::NotFound` for a missing key
/// - `create` lets the store choose the key
/// - `update` fails with `StoreError::Conflict` when `etag` differs from the
///   stored revision, unless `etag` is [`MATCH_ANY_ETAG`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Fetch one value.
    async fn get(&self, collection: &str, key: &str) -> StoreResult<StoredValue>;

    /// Fetch every value in a collection.
    async fn get_all(&self, collection: &str) -> StoreResult<Vec<StoredValue>>;

    /// Store a new value under a store-assigned key.
    async fn create(&self, collection: &str, data: &str) -> StoreResult<StoredValue>;

    /// Write a value, conditioned on `etag`.
    async fn update(
        &self,
        collection: &str,
        key: &str,
        data: &str,
        etag: &str,
    ) -> StoreResult<StoredValue>;

    /// Remove a value.
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()>;

    /// Report whether the store is reachable and healthy.
    async fn status(&self) -> StoreResult<StoreStatus>;
}
