//! Shared vocabulary of known tags.
//!
//! The [`TagRegistry`] is an ordered list of unique tags shared by every
//! candidate. It grows when a user creates a new tag from the input and can
//! shrink only through the administrative flow.

use crate::domain::Tag;

/// Ordered set of unique tags, unique by case-insensitive identity.
///
/// Iteration order is insertion order; suggestions are listed in this order.
///
/// # Examples
///
/// ```
/// use role_tagger::tagging::TagRegistry;
///
/// let mut registry = TagRegistry::from_labels(["SWE", "swe", "SE", "  "]);
/// assert_eq!(registry.labels(), vec!["SWE", "SE"]);
///
/// assert!(registry.find("se").is_some());
/// assert!(registry.insert_label("Cloud Arch").is_some());
/// assert!(registry.insert_label("CLOUD ARCH").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Builds a registry from raw labels.
    ///
    /// Blank labels and case-insensitive duplicates are dropped; the first
    /// occurrence wins.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        let mut dropped = 0_usize;
        for label in labels {
            if registry.insert_label(label.as_ref()).is_none() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, kept = registry.len(), "normalized registry labels");
        }
        registry
    }

    /// Finds the member that is case-insensitively equal to `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Tag> {
        let needle = text.trim().to_lowercase();
        self.tags.iter().find(|tag| tag.key() == needle)
    }

    /// Returns `true` if the registry holds `tag` (ignoring case).
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|member| member.same_as(tag))
    }

    /// Appends `tag` unless a case-insensitive duplicate already exists.
    ///
    /// Returns `true` if the registry grew.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Appends a raw label, returning the new member if the registry grew.
    pub fn insert_label(&mut self, label: &str) -> Option<&Tag> {
        let tag = Tag::new(label)?;
        if self.insert(tag) {
            self.tags.last()
        } else {
            None
        }
    }

    /// Removes the member matching `text` (ignoring case).
    ///
    /// Only the administrative flow removes registry entries; selections that
    /// already reference the tag are left alone.
    pub fn remove(&mut self, text: &str) -> Option<Tag> {
        let needle = text.trim().to_lowercase();
        let position = self.tags.iter().position(|tag| tag.key() == needle)?;
        Some(self.tags.remove(position))
    }

    /// Iterates members in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns the members as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the member labels in registry order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.as_str().to_string()).collect()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the registry has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagRegistry {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Normalizes a role typed into the administrative flow.
///
/// Admin-entered roles are trimmed and upper-cased so the shared vocabulary
/// reads consistently (`"sre "` becomes `"SRE"`). Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// use role_tagger::tagging::registry::normalize_admin_label;
///
/// assert_eq!(normalize_admin_label(" cloud swe ").unwrap().as_str(), "CLOUD SWE");
/// assert!(normalize_admin_label("  ").is_none());
/// ```
#[must_use]
pub fn normalize_admin_label(raw: &str) -> Option<Tag> {
    Tag::new(&raw.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_casing_on_duplicates() {
        let registry = TagRegistry::from_labels(["DevOps", "DEVOPS", "devops"]);
        assert_eq!(registry.labels(), vec!["DevOps"]);
    }

    #[test]
    fn find_trims_and_ignores_case() {
        let registry = TagRegistry::from_labels(["Cloud SWE"]);
        assert_eq!(registry.find("  cloud swe ").map(Tag::as_str), Some("Cloud SWE"));
        assert!(registry.find("cloud").is_none());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut registry = TagRegistry::from_labels(["SWE", "SE", "DBA"]);
        assert_eq!(registry.remove("se").map(Tag::into_string), Some("SE".to_string()));
        assert_eq!(registry.labels(), vec!["SWE", "DBA"]);
        assert!(registry.remove("se").is_none());
    }
}
