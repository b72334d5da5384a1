//! URL construction helpers for the storage-adapter API.
//!
//! Collection names and keys are appended as single path segments, so
//! reserved characters (including `/`) are percent-encoded.

use crate::error::{StorageError, StorageResult};
use url::Url;

/// Append `segments` to the path of `base`.
fn with_segments(base: &Url, segments: &[&str]) -> StorageResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| StorageError::InvalidBaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `{base}/collections/{collection}/values`
pub fn build_values_url(base: &Url, collection: &str) -> StorageResult<Url> {
    with_segments(base, &["collections", collection, "values"])
}

/// `{base}/collections/{collection}/values/{key}`
pub fn build_value_url(base: &Url, collection: &str, key: &str) -> StorageResult<Url> {
    with_segments(base, &["collections", collection, "values", key])
}

/// `{base}/status`
pub fn build_status_url(base: &Url) -> StorageResult<Url> {
    with_segments(base, &["status"])
}

/// Parse and check a configured base URL.
pub fn parse_base_url(raw: &str) -> StorageResult<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(StorageError::InvalidBaseUrl {
            url: raw.to_string(),
        });
    }
    Ok(url)
}
