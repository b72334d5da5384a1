//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the storage-adapter client (via uiconfig-storage) is
//! built here and injected into the settings facade (via uiconfig-core).
//!
//! Command handlers receive the composed context and delegate to the facade.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uiconfig_core::{KeyValueStorePort, SettingsConfig, SettingsFacade};
use uiconfig_storage::{DefaultStorageClient, StorageClientConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the storage-adapter web service.
    pub storage_url: String,
    /// Map provider key injected into themes.
    pub azure_maps_key: Option<String>,
    /// Request timeout for the storage adapter.
    pub timeout: Duration,
}

impl CliConfig {
    /// Take the connection settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            storage_url: cli.storage_url.clone(),
            azure_maps_key: cli.azure_maps_key.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }

    fn settings(&self) -> SettingsConfig {
        let config = SettingsConfig::new();
        match &self.azure_maps_key {
            Some(key) => config.with_map_provider_key(key.clone()),
            None => config,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The settings facade.
    pub facade: SettingsFacade,
}

impl CliContext {
    /// Access the settings facade.
    pub const fn facade(&self) -> &SettingsFacade {
        &self.facade
    }
}

/// Bootstrap the CLI application.
///
/// Builds the storage-adapter client from `config` and wraps it in the
/// settings facade. Nothing is sent over the network here.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    if config.timeout.is_zero() {
        return Err(CliError::Config(
            "timeout must be at least one second".to_string(),
        ));
    }

    let client_config = StorageClientConfig::new()
        .with_base_url(config.storage_url.clone())
        .with_timeout(config.timeout);
    let client = DefaultStorageClient::new(&client_config)?;
    debug!(
        storage_url = client_config.base_url(),
        timeout = ?client_config.timeout(),
        "Storage adapter client configured"
    );

    Ok(bootstrap_with(Arc::new(client), config.settings()))
}

/// Bootstrap over an explicit store (for testing).
pub fn bootstrap_with(store: Arc<dyn KeyValueStorePort>, settings: SettingsConfig) -> CliContext {
    CliContext {
        facade: SettingsFacade::new(store, settings),
    }
}
