//! Wire types of the storage-adapter API.

use serde::{Deserialize, Serialize};
use uiconfig_core::StoredValue;

/// A single value as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueApiModel {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Data")]
    pub data: String,
    #[serde(rename = "ETag")]
    pub etag: String,
}

impl From<ValueApiModel> for StoredValue {
    fn from(value: ValueApiModel) -> Self {
        Self {
            key: value.key,
            data: value.data,
            etag: value.etag,
        }
    }
}

/// Response of a collection listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueListApiModel {
    #[serde(rename = "Items", default)]
    pub items: Vec<ValueApiModel>,
}

/// Body of a create request.
#[derive(Debug, Serialize)]
pub struct CreateValueRequest<'a> {
    #[serde(rename = "Data")]
    pub data: &'a str,
}

/// Body of an update request.
#[derive(Debug, Serialize)]
pub struct UpdateValueRequest<'a> {
    #[serde(rename = "Data")]
    pub data: &'a str,
    #[serde(rename = "ETag")]
    pub etag: &'a str,
}

/// Response of the status endpoint.
///
/// The service reports health as a string starting with `OK` when healthy,
/// e.g. `"OK:Alive and well"`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusApiModel {
    #[serde(rename = "Status")]
    pub status: String,
}

impl StatusApiModel {
    pub fn is_healthy(&self) -> bool {
        self.status
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("ok"))
    }
}
