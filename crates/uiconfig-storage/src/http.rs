//! HTTP backend abstraction for the storage-adapter API.
//!
//! The production implementation uses reqwest. Only `GET` requests are
//! retried; writes are sent once so a lost response never turns into a
//! duplicate create or a spurious etag conflict.

use crate::config::StorageClientConfig;
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the storage adapter.
///
/// This is an implementation detail - external code should use the
/// `KeyValueStorePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> StorageResult<T>;

    /// `POST` a JSON body and deserialize the JSON response.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> StorageResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// `PUT` a JSON body and deserialize the JSON response.
    async fn put_json<B, T>(&self, url: &Url, body: &B) -> StorageResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// `DELETE` a URL, ignoring any response body.
    async fn delete(&self, url: &Url) -> StorageResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors on `GET` requests.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &StorageClientConfig) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// `GET` a URL with automatic retry for transient errors.
    async fn get_with_retry(&self, url: &Url) -> StorageResult<reqwest::Response> {
        let mut last_error: Option<StorageError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay, attempt);
                warn!(
                    %url,
                    attempt,
                    ?delay,
                    error = ?last_error,
                    "Retrying storage adapter request"
                );
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let error = StorageError::RequestFailed {
                        method: "GET",
                        status: status.as_u16(),
                        url: url.to_string(),
                    };

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(error);
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(error);
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| StorageError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Send a request once and fail on a non-success status.
async fn send_once(
    method: &'static str,
    url: &Url,
    request: reqwest::RequestBuilder,
) -> StorageResult<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(StorageError::RequestFailed {
            method,
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

/// Read a response body and deserialize it.
///
/// The body is read as text first so a malformed payload surfaces as a JSON
/// error rather than a transport error.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> StorageResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> StorageResult<T> {
        debug!(%url, "GET");
        let response = self.get_with_retry(url).await?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> StorageResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!(%url, "POST");
        let request = self.client.post(url.as_str()).json(body);
        let response = send_once("POST", url, request).await?;
        read_json(response).await
    }

    async fn put_json<B, T>(&self, url: &Url, body: &B) -> StorageResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!(%url, "PUT");
        let request = self.client.put(url.as_str()).json(body);
        let response = send_once("PUT", url, request).await?;
        read_json(response).await
    }

    async fn delete(&self, url: &Url) -> StorageResult<()> {
        debug!(%url, "DELETE");
        let request = self.client.delete(url.as_str());
        send_once("DELETE", url, request).await?;
        Ok(())
    }
}

/// Delay before retry `attempt` (1-based): `base * 2^(attempt - 1)`, saturating.
fn backoff_delay(base: Duration, attempt: u8) -> Duration {
    let factor = 2u32
        .checked_pow(u32::from(attempt.saturating_sub(1)))
        .unwrap_or(u32::MAX);
    base.saturating_mul(factor)
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
