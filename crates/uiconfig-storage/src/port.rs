//! Port trait implementation for `StorageAdapterClient`.
//!
//! Implements the core-owned `KeyValueStorePort` and maps internal
//! `StorageError`s to `StoreError`s.

use async_trait::async_trait;
use tracing::debug;
use uiconfig_core::{KeyValueStorePort, StoreError, StoreResult, StoreStatus, StoredValue};

use crate::client::StorageAdapterClient;
use crate::error::StorageError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal `StorageError` to a core `StoreError`.
fn map_error(err: StorageError, collection: &str, key: &str) -> StoreError {
    match err {
        StorageError::RequestFailed { status: 404, .. } => StoreError::NotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        },
        StorageError::RequestFailed { status: 409, .. } => StoreError::Conflict {
            collection: collection.to_string(),
            key: key.to_string(),
        },
        StorageError::RequestFailed { .. } | StorageError::Network(_) => StoreError::Unavailable {
            message: err.to_string(),
        },
        StorageError::InvalidResponse { message } => StoreError::InvalidResponse { message },
        StorageError::JsonParse(e) => StoreError::InvalidResponse {
            message: e.to_string(),
        },
        StorageError::InvalidBaseUrl { .. } | StorageError::InvalidUrl(_) => {
            StoreError::Configuration {
                message: err.to_string(),
            }
        }
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> KeyValueStorePort for StorageAdapterClient<B> {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<StoredValue> {
        let value = self
            .get_value(collection, key)
            .await
            .map_err(|e| map_error(e, collection, key))?;
        debug!(collection, key, etag = %value.etag, "Fetched value");
        Ok(value.into())
    }

    async fn get_all(&self, collection: &str) -> StoreResult<Vec<StoredValue>> {
        match self.list_values(collection).await {
            Ok(values) => {
                debug!(collection, count = values.len(), "Listed values");
                Ok(values.into_iter().map(Into::into).collect())
            }
            // A collection that was never written to does not exist yet.
            Err(StorageError::RequestFailed { status: 404, .. }) => Ok(Vec::new()),
            Err(e) => Err(map_error(e, collection, "")),
        }
    }

    async fn create(&self, collection: &str, data: &str) -> StoreResult<StoredValue> {
        let value = self
            .create_value(collection, data)
            .await
            .map_err(|e| map_error(e, collection, ""))?;
        debug!(collection, key = %value.key, "Created value");
        Ok(value.into())
    }

    async fn update(
        &self,
        collection: &str,
        key: &str,
        data: &str,
        etag: &str,
    ) -> StoreResult<StoredValue> {
        let value = self
            .update_value(collection, key, data, etag)
            .await
            .map_err(|e| map_error(e, collection, key))?;
        debug!(collection, key, etag = %value.etag, "Updated value");
        Ok(value.into())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        self.delete_value(collection, key)
            .await
            .map_err(|e| map_error(e, collection, key))?;
        debug!(collection, key, "Deleted value");
        Ok(())
    }

    async fn status(&self) -> StoreResult<StoreStatus> {
        let status = self
            .fetch_status()
            .await
            .map_err(|e| map_error(e, "", ""))?;
        Ok(StoreStatus {
            healthy: status.is_healthy(),
            message: status.status,
        })
    }
}
