//! JSON file-based storage backend.
//!
//! The whole document is kept in memory and rewritten with an atomic file write
//! (write-to-temp + rename) after every change, so a crash never leaves a
//! half-written file behind.
//!
//! # Recovery
//!
//! A document that cannot be parsed is logged and replaced by an empty one on
//! the next write. Malformed values under individual keys are reported by the
//! accessor for that key and leave the rest of the document usable.

use crate::domain::error::{Result, TaggerError};
use crate::domain::CandidateNotes;
use crate::storage::backend::TagStore;
use crate::storage::models::{notes_key, StorageDocument, REGISTRY_KEY};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the single worker thread.
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory document, loaded on creation.
    data: StorageDocument,

    /// Set when `data` has changes that are not on disk yet.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// Parent directories are created automatically. An existing file that is
    /// not a valid document is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use role_tagger::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/roles.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageDocument::default()
        };

        tracing::debug!(
            entry_count = data.entries.len(),
            notes_count = data.notes_count(),
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageDocument> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(StorageDocument::default());
        }

        match serde_json::from_str::<StorageDocument>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded storage data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is malformed, starting empty");
                Ok(StorageDocument::default())
            }
        }
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.updated_at = chrono::Utc::now().timestamp();
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TaggerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }

    fn put(&mut self, key: String, value: Value) -> Result<()> {
        self.data.entries.insert(key, value);
        self.dirty = true;
        self.save_to_file()
    }
}

impl TagStore for JsonStorage {
    fn load_registry(&self) -> Result<Option<Vec<String>>> {
        let _span = tracing::debug_span!("json_load_registry").entered();

        let Some(value) = self.data.entries.get(REGISTRY_KEY) else {
            tracing::debug!("no stored registry");
            return Ok(None);
        };

        let tags: Vec<String> = serde_json::from_value(value.clone())
            .map_err(|e| TaggerError::Storage(format!("malformed registry: {e}")))?;

        tracing::debug!(count = tags.len(), "retrieved registry");
        Ok(Some(tags))
    }

    fn save_registry(&mut self, tags: &[String]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_registry", count = tags.len()).entered();
        self.put(REGISTRY_KEY.to_string(), serde_json::to_value(tags)?)
    }

    fn load_notes(&self, candidate_id: &str) -> Result<CandidateNotes> {
        let _span = tracing::debug_span!("json_load_notes", candidate_id = %candidate_id).entered();

        let notes = self
            .data
            .entries
            .get(&notes_key(candidate_id))
            .map(CandidateNotes::from_stored)
            .unwrap_or_default();

        tracing::debug!(role_count = notes.potential_roles.len(), "notes lookup complete");
        Ok(notes)
    }

    fn save_notes(&mut self, candidate_id: &str, notes: &CandidateNotes) -> Result<()> {
        let _span = tracing::debug_span!("json_save_notes",
            candidate_id = %candidate_id,
            role_count = notes.potential_roles.len()
        )
        .entered();
        self.put(notes_key(candidate_id), serde_json::to_value(notes)?)
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert_eq!(storage.load_registry().unwrap(), None);
    }

    #[test]
    fn malformed_registry_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(
            &path,
            r#"{ "version": 1, "entries": { "rms-available-roles": "SWE,SE" } }"#,
        )
        .unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert!(matches!(storage.load_registry(), Err(TaggerError::Storage(_))));
    }

    #[test]
    fn writes_leave_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.save_registry(&["SWE".to_string()]).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
