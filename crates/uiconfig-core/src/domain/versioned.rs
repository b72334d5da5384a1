//! Store identity envelope for structured documents.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::decode_body;
use crate::ports::{CoreError, StoredValue};

/// A document body that lives in its own collection.
///
/// Implementors are encoded on their own; identity and etag are never part
/// of the stored body.
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync {
    /// Collection the documents are kept in.
    const COLLECTION: &'static str;
}

/// A document body together with the store's key and etag.
///
/// The envelope is composed after decoding the stored body. It serializes
/// flattened (`Id`, `ETag` next to the body members) for presentation only;
/// the facade never writes it to the store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Versioned<T> {
    /// Key assigned by the store.
    #[serde(rename = "Id")]
    pub id: String,

    /// Concurrency token of the stored revision.
    #[serde(rename = "ETag")]
    pub etag: String,

    /// The document body.
    #[serde(flatten)]
    pub data: T,
}

impl<T: DeserializeOwned> Versioned<T> {
    /// Decode a stored value's body and attach its key and etag.
    pub fn from_stored(value: StoredValue) -> Result<Self, CoreError> {
        let data = decode_body(&value.data)?;
        Ok(Self {
            id: value.key,
            etag: value.etag,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeviceGroupData;
    use serde_json::json;

    #[test]
    fn test_from_stored_attaches_identity() {
        let value = StoredValue {
            key: "group-1".to_owned(),
            data: r#"{"DisplayName":"Chillers"}"#.to_owned(),
            etag: "etag-1".to_owned(),
        };

        let group = Versioned::<DeviceGroupData>::from_stored(value).unwrap();

        assert_eq!(group.id, "group-1");
        assert_eq!(group.etag, "etag-1");
        assert_eq!(group.data.display_name.as_deref(), Some("Chillers"));
    }

    #[test]
    fn test_from_stored_ignores_body_identity() {
        let value = StoredValue {
            key: "real".to_owned(),
            data: r#"{"Id":"spoofed","ETag":"old","DisplayName":"x"}"#.to_owned(),
            etag: "live".to_owned(),
        };

        let group = Versioned::<DeviceGroupData>::from_stored(value).unwrap();

        assert_eq!(group.id, "real");
        assert_eq!(group.etag, "live");
    }

    #[test]
    fn test_from_stored_rejects_malformed_body() {
        let value = StoredValue {
            key: "k".to_owned(),
            data: "not json".to_owned(),
            etag: "e".to_owned(),
        };

        let result = Versioned::<DeviceGroupData>::from_stored(value);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_presentation_is_flattened() {
        let group = Versioned {
            id: "g".to_owned(),
            etag: "e".to_owned(),
            data: DeviceGroupData {
                display_name: Some("All".to_owned()),
                conditions: None,
            },
        };

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["Id"], json!("g"));
        assert_eq!(value["ETag"], json!("e"));
        assert_eq!(value["DisplayName"], json!("All"));
    }
}
