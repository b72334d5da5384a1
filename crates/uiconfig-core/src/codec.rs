//! Encoding of document bodies written to the key/value store.
//!
//! Whether `null` members reach the store is an explicit choice of the
//! caller, never an implicit property of the types.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::CoreError;

/// How `null` object members are treated when encoding a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullHandling {
    /// Keep `null` members as they are.
    Include,
    /// Drop every object member whose value is `null`, at any depth.
    /// `null` elements of arrays are kept.
    Omit,
}

/// Encode a body to the JSON text stored in the key/value store.
pub fn encode_body<T: Serialize + ?Sized>(
    body: &T,
    nulls: NullHandling,
) -> Result<String, CoreError> {
    let mut value =
        serde_json::to_value(body).map_err(|e| CoreError::Serialization(e.to_string()))?;
    if nulls == NullHandling::Omit {
        strip_null_members(&mut value);
    }
    serde_json::to_string(&value).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Decode JSON text read from the key/value store.
pub fn decode_body<T: DeserializeOwned>(data: &str) -> Result<T, CoreError> {
    serde_json::from_str(data).map_err(|e| CoreError::Serialization(e.to_string()))
}

fn strip_null_members(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(strip_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_null_members),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceGroupCondition, DeviceGroupData, Logo};
    use serde_json::json;

    #[test]
    fn test_include_keeps_nulls() {
        let data = encode_body(&Logo::default(), NullHandling::Include).unwrap();
        let value: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(value["Name"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("Image"));
    }

    #[test]
    fn test_omit_drops_top_level_nulls() {
        let body = DeviceGroupData {
            display_name: Some("Group".to_owned()),
            conditions: None,
        };
        let data = encode_body(&body, NullHandling::Omit).unwrap();
        assert_eq!(data, r#"{"DisplayName":"Group"}"#);
    }

    #[test]
    fn test_omit_drops_nested_nulls_but_keeps_array_nulls() {
        let body = DeviceGroupData {
            display_name: None,
            conditions: Some(vec![DeviceGroupCondition {
                key: Some("tags.floor".to_owned()),
                operator: None,
                value: Some(json!([1, null])),
            }]),
        };
        let data = encode_body(&body, NullHandling::Omit).unwrap();
        let value: Value = serde_json::from_str(&data).unwrap();

        assert_eq!(
            value,
            json!({"Conditions": [{"Key": "tags.floor", "Value": [1, null]}]})
        );
    }

    #[test]
    fn test_decode_error_is_serialization() {
        let result: Result<Logo, _> = decode_body("{");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }
}
