//! Storage backend abstraction.
//!
//! This module defines the [`TagStore`] trait, the load/save contract the host
//! uses to persist the shared registry and per-candidate notes. Each method maps
//! directly to one thing the worker needs to do; saves always overwrite the whole
//! value.

use crate::domain::error::Result;
use crate::domain::CandidateNotes;

/// Abstraction over persistent storage backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): one JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use role_tagger::storage::{JsonStorage, TagStore};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/roles.json"))?;
/// storage.save_registry(&["SWE".to_string(), "SRE".to_string()])?;
/// assert_eq!(storage.load_registry()?.map(|tags| tags.len()), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait TagStore: Send {
    /// Reads the stored registry.
    ///
    /// Returns `Ok(None)` if no registry has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry is stored but is not a list of strings.
    fn load_registry(&self) -> Result<Option<Vec<String>>>;

    /// Overwrites the stored registry with `tags`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_registry(&mut self, tags: &[String]) -> Result<()>;

    /// Reads a candidate's notes record.
    ///
    /// Missing records yield default notes and malformed records are recovered
    /// as described on [`CandidateNotes::from_stored`].
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_notes(&self, candidate_id: &str) -> Result<CandidateNotes>;

    /// Overwrites a candidate's notes record.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_notes(&mut self, candidate_id: &str, notes: &CandidateNotes) -> Result<()>;
}
