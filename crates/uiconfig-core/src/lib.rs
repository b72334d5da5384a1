#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod codec;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use codec::{NullHandling, decode_body, encode_body};
pub use config::SettingsConfig;
pub use domain::{
    ConditionOperator, DeviceGroup, DeviceGroupCondition, DeviceGroupData, Document, Logo,
    MAP_PROVIDER_KEY_FIELD, Profile, ProfileData, StoredDocument, Versioned, collections,
    default_theme,
};
pub use ports::{
    CoreError, InMemoryKeyValueStore, KeyValueStorePort, MATCH_ANY_ETAG, StoreError,
    StoreResult, StoreStatus, StoredValue,
};
pub use services::SettingsFacade;

#[cfg(test)]
use tokio_test as _;
