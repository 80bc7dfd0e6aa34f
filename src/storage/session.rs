//! Loading and saving tagging state through a [`TagStore`].
//!
//! These helpers apply the recovery rules for persisted state so that the
//! tagging core only ever sees a usable registry and selection.

use crate::domain::error::Result;
use crate::storage::backend::TagStore;
use crate::tagging::{Selection, TagRegistry};

/// Loads the shared registry, falling back to `seed`.
///
/// When no registry is stored yet the seed vocabulary is written back so later
/// sessions share it. A malformed stored registry is logged and replaced by
/// the seed in memory only.
///
/// # Errors
///
/// Returns an error if writing the seed vocabulary fails.
pub fn load_registry_or_seed(store: &mut dyn TagStore, seed: &[String]) -> Result<TagRegistry> {
    let _span = tracing::debug_span!("load_registry_or_seed", seed_count = seed.len()).entered();

    match store.load_registry() {
        Ok(Some(labels)) => Ok(TagRegistry::from_labels(labels)),
        Ok(None) => {
            let registry = TagRegistry::from_labels(seed);
            tracing::info!(count = registry.len(), "seeding role registry");
            store.save_registry(&registry.labels())?;
            Ok(registry)
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored registry unusable, using seed roles");
            Ok(TagRegistry::from_labels(seed))
        }
    }
}

/// Loads a candidate's selected roles.
///
/// Roles missing from the registry are kept; blanks and duplicates are dropped.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn load_selection(store: &dyn TagStore, candidate_id: &str) -> Result<Selection> {
    let notes = store.load_notes(candidate_id)?;
    Ok(Selection::from_labels(&notes.potential_roles))
}

/// Replaces a candidate's selected roles, keeping the other notes fields.
///
/// Returns the number of roles stored.
///
/// # Errors
///
/// Returns an error if the notes cannot be read or written.
pub fn save_selection(store: &mut dyn TagStore, candidate_id: &str, tags: &[String]) -> Result<usize> {
    let _span = tracing::debug_span!("save_selection", candidate_id = %candidate_id).entered();

    let mut notes = store.load_notes(candidate_id)?;
    notes.potential_roles = tags.to_vec();
    store.save_notes(candidate_id, &notes)?;

    Ok(notes.potential_roles.len())
}
