//! Solution logo and its fallback rules.

use serde::{Deserialize, Serialize};

/// The solution logo.
///
/// `image` holds the encoded image content (base64 text) and `content_type`
/// its MIME type. The two always travel together when a stored value is
/// used to fill in a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Logo {
    /// Display name shown next to the logo.
    pub name: Option<String>,

    /// Encoded image content.
    pub image: Option<String>,

    /// MIME type of `image` (e.g. `image/png`).
    #[serde(rename = "Type")]
    pub content_type: Option<String>,

    /// True only for the built-in logo returned when nothing is stored.
    #[serde(default)]
    pub is_default: bool,
}

impl Logo {
    /// The built-in logo used when none has been stored yet.
    pub const DEFAULT: Self = Self {
        name: None,
        image: None,
        content_type: None,
        is_default: true,
    };

    /// Whether a write of this logo must first consult the stored one.
    #[must_use]
    pub const fn needs_fallback(&self) -> bool {
        self.name.is_none() || self.image.is_none()
    }

    /// Fill absent fields from `current`, unless `current` is the default logo.
    ///
    /// A missing name is taken from `current`. A missing image takes both
    /// image and type from `current`; the type is never taken on its own.
    pub fn fill_missing_from(&mut self, current: &Self) {
        if current.is_default {
            return;
        }
        if self.name.is_none() {
            self.name.clone_from(&current.name);
        }
        if self.image.is_none() {
            self.image.clone_from(&current.image);
            self.content_type.clone_from(&current.content_type);
        }
    }
}
