//! Suggestion computation.
//!
//! [`suggest`] is a pure function of the raw input, the current selection and
//! the registry. Matching is plain case-insensitive substring containment and
//! results keep registry order; there is no relevance scoring.
//!
//! # Algorithm
//!
//! 1. Trim the input; empty input yields no suggestions
//! 2. Keep registry members that are not selected and whose lower-cased label
//!    contains the lower-cased input
//! 3. Unless some registry member equals the input exactly (ignoring case),
//!    put a [`Suggestion::CreateNew`] for the trimmed input first

use super::registry::TagRegistry;
use super::selection::Selection;
use crate::domain::Tag;

/// A candidate shown to the user while typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// A registry member that is not yet selected.
    Existing(Tag),

    /// Create this new tag, add it to the registry and select it.
    CreateNew(String),
}

impl Suggestion {
    /// Text shown in the suggestion list.
    ///
    /// # Examples
    ///
    /// ```
    /// use role_tagger::tagging::Suggestion;
    ///
    /// assert_eq!(Suggestion::CreateNew("SRE".into()).label(), "Create \"SRE\"");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Existing(tag) => tag.as_str().to_string(),
            Self::CreateNew(text) => format!("Create \"{text}\""),
        }
    }

    /// The tag text this suggestion would select.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Existing(tag) => tag.as_str(),
            Self::CreateNew(text) => text,
        }
    }

    /// Returns `true` for the create sentinel.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self, Self::CreateNew(_))
    }
}

/// Computes the ordered suggestions for `raw_input`.
///
/// # Examples
///
/// ```
/// use role_tagger::tagging::{suggest, Selection, Suggestion, TagRegistry};
///
/// let registry = TagRegistry::from_labels(["SWE", "SE"]);
/// let selection = Selection::new();
///
/// let labels: Vec<String> = suggest("s", &selection, &registry).iter().map(Suggestion::label).collect();
/// assert_eq!(labels, vec!["Create \"s\"", "SWE", "SE"]);
///
/// let exact = suggest("SWE", &selection, &registry);
/// assert_eq!(exact.len(), 1);
/// assert!(!exact[0].is_create());
/// ```
#[must_use]
pub fn suggest(raw_input: &str, selection: &Selection, registry: &TagRegistry) -> Vec<Suggestion> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let needle = trimmed.to_lowercase();

    let filtered = registry
        .iter()
        .filter(|tag| !selection.contains(tag) && tag.key().contains(&needle))
        .cloned()
        .map(Suggestion::Existing);

    let exact_match = registry.iter().any(|tag| tag.key() == needle);

    let mut suggestions = Vec::with_capacity(registry.len() + 1);
    if !exact_match {
        suggestions.push(Suggestion::CreateNew(trimmed.to_string()));
    }
    suggestions.extend(filtered);

    tracing::trace!(
        needle = %needle,
        exact_match,
        suggestion_count = suggestions.len(),
        "suggestions computed"
    );

    suggestions
}
