//! Storage-adapter client.
//!
//! Generic over the HTTP backend so it can be tested without a network.

mod values;

use crate::config::StorageClientConfig;
use crate::error::StorageResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::StatusApiModel;
use crate::url::{build_status_url, parse_base_url};
use uiconfig_core::{StoreError, StoreResult};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default storage-adapter client using the reqwest HTTP backend.
pub type DefaultStorageClient = StorageAdapterClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the storage-adapter REST API.
///
/// Use `DefaultStorageClient` for production code; the generic parameter `B`
/// is an implementation detail.
pub struct StorageAdapterClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultStorageClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `StoreError::Configuration` when the base URL is unusable
    /// or the HTTP client cannot be built.
    pub fn new(config: &StorageClientConfig) -> StoreResult<Self> {
        let configuration_error = |e: crate::error::StorageError| StoreError::Configuration {
            message: e.to_string(),
        };
        let base_url = parse_base_url(&config.base_url).map_err(configuration_error)?;
        let backend = ReqwestBackend::new(config).map_err(configuration_error)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> StorageAdapterClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> Self {
        Self {
            backend,
            base_url: parse_base_url(base_url).expect("test base URL is valid"),
        }
    }

    /// Fetch the service status.
    pub(crate) async fn fetch_status(&self) -> StorageResult<StatusApiModel> {
        let url = build_status_url(&self.base_url)?;
        self.backend.get_json(&url).await
    }
}
