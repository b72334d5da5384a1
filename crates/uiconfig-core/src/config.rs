//! Facade configuration.

/// Configuration consumed by [`SettingsFacade`](crate::SettingsFacade).
///
/// # Example
///
/// ```
/// use uiconfig_core::SettingsConfig;
///
/// let config = SettingsConfig::new().with_map_provider_key("maps-key");
/// assert_eq!(config.map_provider_key(), "maps-key");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsConfig {
    map_provider_key: String,
}

impl SettingsConfig {
    /// Create a configuration with an empty map-provider key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key injected into themes that don't carry one.
    #[must_use]
    pub fn with_map_provider_key(mut self, key: impl Into<String>) -> Self {
        self.map_provider_key = key.into();
        self
    }

    /// The key injected into themes that don't carry one.
    #[must_use]
    pub fn map_provider_key(&self) -> &str {
        &self.map_provider_key
    }
}
