//! Core domain types.
//!
//! These types describe what the facade stores, independent of how the
//! key/value store is reached.
//!
//! # Structure
//!
//! - `theme` - free-form JSON documents (themes, user settings) and the theme defaults
//! - `logo` - the solution logo and its fallback rules
//! - `device_group` / `profile` - structured bodies kept in their own collections
//! - `versioned` - the `Versioned<T>` envelope carrying store identity and etag

mod device_group;
mod logo;
mod profile;
mod theme;
mod versioned;

pub use device_group::{ConditionOperator, DeviceGroup, DeviceGroupCondition, DeviceGroupData};
pub use logo::Logo;
pub use profile::{Profile, ProfileData};
pub use theme::{Document, MAP_PROVIDER_KEY_FIELD, default_theme, with_map_provider_key};
pub use versioned::{StoredDocument, Versioned};

/// Fixed collection names and well-known keys in the key/value store.
pub mod collections {
    /// Solution-wide settings (theme, logo).
    pub const SOLUTION_SETTINGS: &str = "solution-settings";
    /// Per-user settings documents, keyed by user-supplied id.
    pub const USER_SETTINGS: &str = "user-settings";
    /// Device group definitions.
    pub const DEVICE_GROUPS: &str = "devicegroups";
    /// Profile definitions.
    pub const PROFILES: &str = "profiles";

    /// Key of the theme document in [`SOLUTION_SETTINGS`].
    pub const THEME_KEY: &str = "theme";
    /// Key of the logo document in [`SOLUTION_SETTINGS`].
    pub const LOGO_KEY: &str = "logo";
}
