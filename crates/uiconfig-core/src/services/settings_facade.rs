//! Settings facade - maps the UI configuration entities onto the key/value store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::codec::{NullHandling, decode_body, encode_body};
use crate::config::SettingsConfig;
use crate::domain::{
    DeviceGroup, DeviceGroupData, Document, Logo, Profile, ProfileData, StoredDocument,
    Versioned, collections, default_theme, with_map_provider_key,
};
use crate::ports::{CoreError, KeyValueStorePort, MATCH_ANY_ETAG, StoreError, StoreStatus};

/// Stateless facade over the key/value store.
///
/// Every call fetches fresh data; nothing is cached between calls. Themes,
/// logos and user settings are written unconditionally (last writer wins).
/// Device groups and profiles are updated against the caller's etag.
pub struct SettingsFacade {
    store: Arc<dyn KeyValueStorePort>,
    config: SettingsConfig,
}

impl SettingsFacade {
    /// Create a new facade over `store`.
    pub fn new(store: Arc<dyn KeyValueStorePort>, config: SettingsConfig) -> Self {
        Self { store, config }
    }

    /// The facade configuration.
    pub const fn config(&self) -> &SettingsConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Get the solution theme, or the default theme when none is stored.
    pub async fn get_theme(&self) -> Result<Document, CoreError> {
        let theme = match self
            .store
            .get(collections::SOLUTION_SETTINGS, collections::THEME_KEY)
            .await
        {
            Ok(value) => decode_body(&value.data)?,
            Err(StoreError::NotFound { .. }) => {
                info!("No theme stored, using default theme");
                default_theme().clone()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(self.inject_map_provider_key(theme))
    }

    /// Replace the solution theme.
    pub async fn set_theme(&self, theme: &Document) -> Result<Document, CoreError> {
        let data = encode_body(theme, NullHandling::Include)?;
        let stored = self
            .store
            .update(
                collections::SOLUTION_SETTINGS,
                collections::THEME_KEY,
                &data,
                MATCH_ANY_ETAG,
            )
            .await?;
        debug!(etag = %stored.etag, "Theme stored");
        Ok(self.inject_map_provider_key(decode_body(&stored.data)?))
    }

    fn inject_map_provider_key(&self, theme: Document) -> Document {
        with_map_provider_key(theme, self.config.map_provider_key())
    }

    // ------------------------------------------------------------------
    // User settings
    // ------------------------------------------------------------------

    /// Get a user's settings document, or an empty document when none is stored.
    pub async fn get_user_setting(&self, id: &str) -> Result<Document, CoreError> {
        validate_id(id)?;
        match self.store.get(collections::USER_SETTINGS, id).await {
            Ok(value) => decode_body(&value.data),
            Err(StoreError::NotFound { .. }) => {
                debug!(id, "No user setting stored");
                Ok(Document::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace a user's settings document.
    pub async fn set_user_setting(
        &self,
        id: &str,
        setting: &Document,
    ) -> Result<Document, CoreError> {
        validate_id(id)?;
        let data = encode_body(setting, NullHandling::Include)?;
        let stored = self
            .store
            .update(collections::USER_SETTINGS, id, &data, MATCH_ANY_ETAG)
            .await?;
        decode_body(&stored.data)
    }

    // ------------------------------------------------------------------
    // Logo
    // ------------------------------------------------------------------

    /// Get the solution logo, or [`Logo::DEFAULT`] when none is stored.
    pub async fn get_logo(&self) -> Result<Logo, CoreError> {
        match self
            .store
            .get(collections::SOLUTION_SETTINGS, collections::LOGO_KEY)
            .await
        {
            Ok(value) => decode_body(&value.data),
            Err(StoreError::NotFound { .. }) => {
                info!("No logo stored, using default logo");
                Ok(Logo::DEFAULT)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the solution logo.
    ///
    /// When the name or the image is missing, the stored logo fills the gap
    /// (see [`Logo::fill_missing_from`]). The read and the write are not
    /// atomic: concurrent logo updates may interleave.
    pub async fn set_logo(&self, mut logo: Logo) -> Result<Logo, CoreError> {
        if logo.needs_fallback() {
            let current = self.get_logo().await?;
            logo.fill_missing_from(&current);
        }
        logo.is_default = false;

        let data = encode_body(&logo, NullHandling::Include)?;
        let stored = self
            .store
            .update(
                collections::SOLUTION_SETTINGS,
                collections::LOGO_KEY,
                &data,
                MATCH_ANY_ETAG,
            )
            .await?;
        decode_body(&stored.data)
    }

    // ------------------------------------------------------------------
    // Device groups
    // ------------------------------------------------------------------

    /// List all device groups.
    pub async fn get_all_device_groups(&self) -> Result<Vec<DeviceGroup>, CoreError> {
        self.list_documents().await
    }

    /// Get one device group.
    pub async fn get_device_group(&self, id: &str) -> Result<DeviceGroup, CoreError> {
        self.get_document(id).await
    }

    /// Create a device group; the store assigns its id.
    pub async fn create_device_group(
        &self,
        input: &DeviceGroupData,
    ) -> Result<DeviceGroup, CoreError> {
        self.create_document(input).await
    }

    /// Update a device group, provided `etag` still matches the stored revision.
    pub async fn update_device_group(
        &self,
        id: &str,
        input: &DeviceGroupData,
        etag: &str,
    ) -> Result<DeviceGroup, CoreError> {
        self.update_document(id, input, etag).await
    }

    /// Delete a device group.
    pub async fn delete_device_group(&self, id: &str) -> Result<(), CoreError> {
        self.delete_document::<DeviceGroupData>(id).await
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// List all profiles.
    pub async fn get_all_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        self.list_documents().await
    }

    /// Get one profile.
    pub async fn get_profile(&self, id: &str) -> Result<Profile, CoreError> {
        self.get_document(id).await
    }

    /// Create a profile; the store assigns its id.
    pub async fn create_profile(&self, input: &ProfileData) -> Result<Profile, CoreError> {
        self.create_document(input).await
    }

    /// Update a profile, provided `etag` still matches the stored revision.
    pub async fn update_profile(
        &self,
        id: &str,
        input: &ProfileData,
        etag: &str,
    ) -> Result<Profile, CoreError> {
        self.update_document(id, input, etag).await
    }

    /// Delete a profile.
    pub async fn delete_profile(&self, id: &str) -> Result<(), CoreError> {
        self.delete_document::<ProfileData>(id).await
    }

    // ------------------------------------------------------------------
    // Store health
    // ------------------------------------------------------------------

    /// Ask the store for its health.
    pub async fn storage_status(&self) -> Result<StoreStatus, CoreError> {
        Ok(self.store.status().await?)
    }

    // ------------------------------------------------------------------
    // Collection documents
    // ------------------------------------------------------------------

    async fn list_documents<T: StoredDocument>(&self) -> Result<Vec<Versioned<T>>, CoreError> {
        let values = self.store.get_all(T::COLLECTION).await?;
        debug!(collection = T::COLLECTION, count = values.len(), "Listed documents");
        values.into_iter().map(Versioned::from_stored).collect()
    }

    async fn get_document<T: StoredDocument>(&self, id: &str) -> Result<Versioned<T>, CoreError> {
        validate_id(id)?;
        let value = self.store.get(T::COLLECTION, id).await?;
        Versioned::from_stored(value)
    }

    async fn create_document<T: StoredDocument>(
        &self,
        input: &T,
    ) -> Result<Versioned<T>, CoreError> {
        let data = encode_body(input, NullHandling::Omit)?;
        let value = self.store.create(T::COLLECTION, &data).await?;
        debug!(collection = T::COLLECTION, id = %value.key, "Created document");
        Versioned::from_stored(value)
    }

    async fn update_document<T: StoredDocument>(
        &self,
        id: &str,
        input: &T,
        etag: &str,
    ) -> Result<Versioned<T>, CoreError> {
        validate_id(id)?;
        let data = encode_body(input, NullHandling::Omit)?;
        let value = self.store.update(T::COLLECTION, id, &data, etag).await?;
        debug!(collection = T::COLLECTION, id, etag = %value.etag, "Updated document");
        Versioned::from_stored(value)
    }

    async fn delete_document<T: StoredDocument>(&self, id: &str) -> Result<(), CoreError> {
        validate_id(id)?;
        self.store.delete(T::COLLECTION, id).await?;
        debug!(collection = T::COLLECTION, id, "Deleted document");
        Ok(())
    }
}

fn validate_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation("id must not be empty".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAP_PROVIDER_KEY_FIELD;
    use crate::ports::{MockKeyValueStorePort, StoredValue};
    use serde_json::json;

    fn facade(store: MockKeyValueStorePort) -> SettingsFacade {
        SettingsFacade::new(
            Arc::new(store),
            SettingsConfig::new().with_map_provider_key("maps-key"),
        )
    }

    fn echo(key: &str, data: &str) -> StoredValue {
        StoredValue {
            key: key.to_owned(),
            data: data.to_owned(),
            etag: "etag-2".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_get_theme_propagates_transport_failure() {
        let mut store = MockKeyValueStorePort::new();
        store.expect_get().returning(|_, _| {
            Err(StoreError::Unavailable {
                message: "connection refused".to_owned(),
            })
        });

        let err = facade(store).get_theme().await.unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_set_theme_writes_unconditionally() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_update()
            .withf(|collection: &str, key: &str, _data: &str, etag: &str| {
                collection == "solution-settings" && key == "theme" && etag == "*"
            })
            .times(1)
            .returning(|_, key, data, _| Ok(echo(key, data)));

        let theme = json!({"Name": "Dark"}).as_object().cloned().unwrap();
        let stored = facade(store).set_theme(&theme).await.unwrap();

        assert_eq!(stored.get("Name"), Some(&json!("Dark")));
        assert_eq!(stored.get(MAP_PROVIDER_KEY_FIELD), Some(&json!("maps-key")));
    }

    #[tokio::test]
    async fn test_set_logo_with_name_and_image_skips_read() {
        let mut store = MockKeyValueStorePort::new();
        store.expect_get().times(0);
        store
            .expect_update()
            .times(1)
            .returning(|_, key, data, _| Ok(echo(key, data)));

        let logo = Logo {
            name: Some("Contoso".to_owned()),
            image: Some("aW1n".to_owned()),
            content_type: Some("image/png".to_owned()),
            is_default: false,
        };
        let stored = facade(store).set_logo(logo.clone()).await.unwrap();

        assert_eq!(stored, logo);
    }

    #[tokio::test]
    async fn test_set_logo_never_stores_default_flag() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_update()
            .withf(|_: &str, _: &str, data: &str, _: &str| data.contains(r#""IsDefault":false"#))
            .times(1)
            .returning(|_, key, data, _| Ok(echo(key, data)));

        let logo = Logo {
            name: Some("n".to_owned()),
            image: Some("i".to_owned()),
            content_type: None,
            is_default: true,
        };
        let stored = facade(store).set_logo(logo).await.unwrap();
        assert!(!stored.is_default);
    }

    #[tokio::test]
    async fn test_set_logo_read_failure_aborts_write() {
        let mut store = MockKeyValueStorePort::new();
        store.expect_get().returning(|_, _| {
            Err(StoreError::Unavailable {
                message: "timeout".to_owned(),
            })
        });
        store.expect_update().times(0);

        let result = facade(store).set_logo(Logo::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_device_group_omits_nulls() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_create()
            .withf(|collection: &str, data: &str| {
                collection == "devicegroups" && data == r#"{"DisplayName":"Floor 1"}"#
            })
            .times(1)
            .returning(|_, data| Ok(echo("new-id", data)));

        let input = DeviceGroupData {
            display_name: Some("Floor 1".to_owned()),
            conditions: None,
        };
        let group = facade(store).create_device_group(&input).await.unwrap();

        assert_eq!(group.id, "new-id");
        assert_eq!(group.etag, "etag-2");
        assert_eq!(group.data, input);
    }

    #[tokio::test]
    async fn test_update_profile_passes_caller_etag() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_update()
            .withf(|collection: &str, key: &str, _: &str, etag: &str| {
                collection == "profiles" && key == "p1" && etag == "etag-1"
            })
            .times(1)
            .returning(|_, key, data, _| Ok(echo(key, data)));

        let input = ProfileData {
            name: Some("Operators".to_owned()),
            ..ProfileData::default()
        };
        let profile = facade(store)
            .update_profile("p1", &input, "etag-1")
            .await
            .unwrap();

        assert_eq!(profile.id, "p1");
        assert_eq!(profile.data.name.as_deref(), Some("Operators"));
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected_before_store_call() {
        let store = MockKeyValueStorePort::new();
        let facade = facade(store);

        assert!(matches!(
            facade.get_device_group(" ").await,
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            facade.get_user_setting("").await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_stored_logo_is_serialization_error() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .returning(|_, key| Ok(echo(key, "[1, 2")));

        let err = facade(store).get_logo().await.unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_storage_status() {
        let mut store = MockKeyValueStorePort::new();
        store.expect_status().returning(|| {
            Ok(StoreStatus {
                healthy: true,
                message: "OK".to_owned(),
            })
        });

        let status = facade(store).storage_status().await.unwrap();
        assert!(status.healthy);
    }
}
