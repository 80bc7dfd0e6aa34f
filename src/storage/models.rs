//! On-disk document layout.
//!
//! The store mirrors a flat key/value store: every value lives under a string
//! key inside one JSON document. The tag registry uses a fixed key shared by
//! all candidates and each candidate's notes record lives under its own key.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Current document format version.
pub const STORAGE_VERSION: u32 = 1;

/// Key holding the shared role vocabulary.
pub const REGISTRY_KEY: &str = "rms-available-roles";

/// Key prefix for per-candidate notes records.
pub const NOTES_KEY_PREFIX: &str = "rms-notes-";

/// Roles the vocabulary starts with when nothing has been stored yet.
pub const DEFAULT_SEED_ROLES: [&str; 8] = [
    "SWE",
    "SE",
    "CLOUD SWE",
    "CLOUD ARCH",
    "DBA",
    "DBE",
    "SA",
    "DEVOPS",
];

/// Returns the storage key for a candidate's notes record.
///
/// # Examples
///
/// ```
/// use role_tagger::storage::models::notes_key;
///
/// assert_eq!(notes_key("42"), "rms-notes-42");
/// ```
#[must_use]
pub fn notes_key(candidate_id: &str) -> String {
    format!("{NOTES_KEY_PREFIX}{candidate_id}")
}

/// Top-level document serialized to disk.
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": 1718000000,
///   "entries": {
///     "rms-available-roles": ["SWE", "SE"],
///     "rms-notes-42": { "salaryRange": "", "potentialRoles": ["SWE"] }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDocument {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Unix timestamp of the last write.
    #[serde(default)]
    pub updated_at: i64,

    /// Stored values by key. Values are kept as raw JSON so that a malformed
    /// entry only affects its own key.
    #[serde(default)]
    pub entries: BTreeMap<String, Value>,
}

impl Default for StorageDocument {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            updated_at: 0,
            entries: BTreeMap::new(),
        }
    }
}

impl StorageDocument {
    /// Number of candidate notes records in the document.
    #[must_use]
    pub fn notes_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|key| key.starts_with(NOTES_KEY_PREFIX))
            .count()
    }
}
