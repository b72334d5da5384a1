//! Profile documents.

use serde::{Deserialize, Serialize};

use super::collections;
use super::theme::Document;
use super::versioned::{StoredDocument, Versioned};

/// Stored body of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileData {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Free-form profile settings.
    pub settings: Option<Document>,
}

impl StoredDocument for ProfileData {
    const COLLECTION: &'static str = collections::PROFILES;
}

/// A profile as read from the store.
pub type Profile = Versioned<ProfileData>;
