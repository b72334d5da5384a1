//! Device group documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::collections;
use super::versioned::{StoredDocument, Versioned};

/// Comparison applied by a device group condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionOperator {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Greater than.
    Gt,
    /// Less than or equal.
    Le,
    /// Greater than or equal.
    Ge,
    /// Member of a list.
    In,
}

/// One filter clause selecting devices by a twin/tag property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceGroupCondition {
    /// Property path, e.g. `tags.building`.
    pub key: Option<String>,
    pub operator: Option<ConditionOperator>,
    /// Right-hand side; any JSON value.
    pub value: Option<Value>,
}

/// Stored body of a device group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceGroupData {
    pub display_name: Option<String>,
    pub conditions: Option<Vec<DeviceGroupCondition>>,
}

impl StoredDocument for DeviceGroupData {
    const COLLECTION: &'static str = collections::DEVICE_GROUPS;
}

/// A device group as read from the store.
pub type DeviceGroup = Versioned<DeviceGroupData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_wire_names() {
        let ops = [
            (ConditionOperator::Eq, "EQ"),
            (ConditionOperator::Ne, "NE"),
            (ConditionOperator::Lt, "LT"),
            (ConditionOperator::Gt, "GT"),
            (ConditionOperator::Le, "LE"),
            (ConditionOperator::Ge, "GE"),
            (ConditionOperator::In, "IN"),
        ];
        for (op, name) in ops {
            assert_eq!(serde_json::to_value(op).unwrap(), json!(name));
        }
    }

    #[test]
    fn test_parse_body() {
        let body: DeviceGroupData = serde_json::from_value(json!({
            "DisplayName": "Prototyping devices",
            "Conditions": [
                {"Key": "tags.type", "Operator": "EQ", "Value": "Prototyping"},
                {"Key": "properties.reported.Firmware", "Operator": "IN", "Value": ["1.0", "1.1"]}
            ]
        }))
        .unwrap();

        let conditions = body.conditions.unwrap();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].operator, Some(ConditionOperator::Eq));
        assert_eq!(conditions[1].value, Some(json!(["1.0", "1.1"])));
    }
}
