//! In-process implementation of the key/value store port.
//!
//! Keeps every collection in memory and follows the same contract as the
//! storage-adapter service: store-assigned keys, a fresh etag per write,
//! conflict on a stale etag, not-found on delete of a missing key.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::key_value_store::{KeyValueStorePort, MATCH_ANY_ETAG, StoreStatus, StoredValue};
use super::{StoreError, StoreResult};

#[derive(Debug, Clone)]
struct Entry {
    data: String,
    etag: String,
}

/// Key/value store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Entry>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn new_etag() -> String {
        Uuid::new_v4().to_string()
    }

    fn not_found(collection: &str, key: &str) -> StoreError {
        StoreError::NotFound {
            collection: collection.to_owned(),
            key: key.to_owned(),
        }
    }
}

fn to_value(key: &str, entry: &Entry) -> StoredValue {
    StoredValue {
        key: key.to_owned(),
        data: entry.data.clone(),
        etag: entry.etag.clone(),
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<StoredValue> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|values| values.get(key))
            .map(|entry| to_value(key, entry))
            .ok_or_else(|| Self::not_found(collection, key))
    }

    async fn get_all(&self, collection: &str) -> StoreResult<Vec<StoredValue>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|values| {
                values
                    .iter()
                    .map(|(key, entry)| to_value(key, entry))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, collection: &str, data: &str) -> StoreResult<StoredValue> {
        let key = Uuid::new_v4().to_string();
        let entry = Entry {
            data: data.to_owned(),
            etag: Self::new_etag(),
        };
        let value = to_value(&key, &entry);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key, entry);
        Ok(value)
    }

    async fn update(
        &self,
        collection: &str,
        key: &str,
        data: &str,
        etag: &str,
    ) -> StoreResult<StoredValue> {
        let mut collections = self.collections.write().await;
        let values = collections.entry(collection.to_owned()).or_default();

        if etag != MATCH_ANY_ETAG {
            match values.get(key) {
                Some(current) if current.etag != etag => {
                    return Err(StoreError::Conflict {
                        collection: collection.to_owned(),
                        key: key.to_owned(),
                    });
                }
                Some(_) => {}
                None => return Err(Self::not_found(collection, key)),
            }
        }

        let entry = Entry {
            data: data.to_owned(),
            etag: Self::new_etag(),
        };
        let value = to_value(key, &entry);
        values.insert(key.to_owned(), entry);
        Ok(value)
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .get_mut(collection)
            .and_then(|values| values.remove(key))
            .map(|_| ())
            .ok_or_else(|| Self::not_found(collection, key))
    }

    async fn status(&self) -> StoreResult<StoreStatus> {
        Ok(StoreStatus {
            healthy: true,
            message: "OK: in-memory store".to_owned(),
        })
    }
}
