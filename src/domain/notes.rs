//! Per-candidate notes record.
//!
//! The selection of roles for a candidate is one field inside a larger notes
//! record that also carries free-text fields the tagger never edits. The whole
//! record is stored under one key and rewritten on every change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Private recruiter notes for one candidate.
///
/// Serialized with camelCase keys. Missing fields default to empty so that
/// partially written records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateNotes {
    /// Expected salary range, free text.
    pub salary_range: String,

    /// Contracts the candidate could be staffed on, free text.
    pub potential_contracts: String,

    /// General private notes.
    pub general_notes: String,

    /// Roles attached to the candidate, in the order they were added.
    pub potential_roles: Vec<String>,
}

impl CandidateNotes {
    /// Recovers a notes record from an arbitrary stored JSON value.
    ///
    /// Older records were saved as a bare string of general notes; those are
    /// carried over into [`general_notes`](Self::general_notes). Objects are
    /// merged over the defaults. Anything else yields empty notes.
    ///
    /// # Examples
    ///
    /// ```
    /// use role_tagger::domain::CandidateNotes;
    ///
    /// let legacy = serde_json::json!("call back in spring");
    /// let notes = CandidateNotes::from_stored(&legacy);
    /// assert_eq!(notes.general_notes, "call back in spring");
    /// assert!(notes.potential_roles.is_empty());
    /// ```
    #[must_use]
    pub fn from_stored(value: &Value) -> Self {
        match value {
            Value::String(text) => Self {
                general_notes: text.clone(),
                ..Self::default()
            },
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "malformed notes record, using defaults");
                Self::default()
            }),
            _ => {
                tracing::warn!("notes record has unexpected shape, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_objects_merge_over_defaults() {
        let notes = CandidateNotes::from_stored(&json!({ "salaryRange": "120k", "potentialRoles": ["SWE"] }));
        assert_eq!(notes.salary_range, "120k");
        assert_eq!(notes.potential_roles, vec!["SWE".to_string()]);
        assert_eq!(notes.general_notes, "");
    }

    #[test]
    fn wrong_field_types_fall_back_to_defaults() {
        let notes = CandidateNotes::from_stored(&json!({ "potentialRoles": "SWE" }));
        assert_eq!(notes, CandidateNotes::default());
        assert_eq!(CandidateNotes::from_stored(&json!(42)), CandidateNotes::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let notes = CandidateNotes {
            potential_roles: vec!["DBA".to_string()],
            ..CandidateNotes::default()
        };
        let value = serde_json::to_value(&notes).unwrap();
        assert_eq!(value["potentialRoles"], json!(["DBA"]));
        assert!(value.get("generalNotes").is_some());
    }
}
