//! Free-form JSON documents and the theme defaults.

use std::sync::LazyLock;

use serde_json::{Map, Value};

/// An opaque JSON object.
///
/// Member order is preserved, so documents round-trip through the store
/// without reshuffling unknown fields.
pub type Document = Map<String, Value>;

/// Theme member that carries the map-provider key for client-side map rendering.
pub const MAP_PROVIDER_KEY_FIELD: &str = "AzureMapsKey";

static DEFAULT_THEME: LazyLock<Document> = LazyLock::new(|| {
    let mut theme = Document::new();
    theme.insert("Name".to_owned(), Value::from("Default"));
    theme.insert("Description".to_owned(), Value::from("Default Theme"));
    theme
});

/// The built-in theme used when none has been stored yet.
#[must_use]
pub fn default_theme() -> &'static Document {
    &DEFAULT_THEME
}

/// Ensure `theme` carries a map-provider key.
///
/// An absent member is set to `key`. A member that is present is kept as
/// stored, even when it is `null`.
#[must_use]
pub fn with_map_provider_key(mut theme: Document, key: &str) -> Document {
    if !theme.contains_key(MAP_PROVIDER_KEY_FIELD) {
        theme.insert(MAP_PROVIDER_KEY_FIELD.to_owned(), Value::from(key));
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_default_theme_contents() {
        let theme = default_theme();
        assert_eq!(theme.get("Name"), Some(&json!("Default")));
        assert_eq!(theme.get("Description"), Some(&json!("Default Theme")));
        assert!(!theme.contains_key(MAP_PROVIDER_KEY_FIELD));
    }

    #[test]
    fn test_injects_missing_key() {
        let theme = with_map_provider_key(doc(json!({"Name": "Dark"})), "maps-key");
        assert_eq!(theme.get(MAP_PROVIDER_KEY_FIELD), Some(&json!("maps-key")));
    }

    #[test]
    fn test_keeps_null_key() {
        let theme = with_map_provider_key(doc(json!({"AzureMapsKey": null})), "maps-key");
        assert_eq!(theme.get(MAP_PROVIDER_KEY_FIELD), Some(&json!(null)));
    }

    #[test]
    fn test_keeps_existing_key() {
        let theme = with_map_provider_key(doc(json!({"AzureMapsKey": "stored"})), "maps-key");
        assert_eq!(theme.get(MAP_PROVIDER_KEY_FIELD), Some(&json!("stored")));
    }

    #[test]
    fn test_keeps_member_order() {
        let theme = with_map_provider_key(doc(json!({"b": 1, "a": 2})), "k");
        let keys: Vec<&str> = theme.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", MAP_PROVIDER_KEY_FIELD]);
    }
}
