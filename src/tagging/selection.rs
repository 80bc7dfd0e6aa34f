//! Tags attached to one candidate.

use crate::domain::Tag;

/// Ordered set of tags currently attached to one entity.
///
/// Order is insertion order and removal never reorders the remaining tags.
/// No two entries are case-insensitively equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tags: Vec<Tag>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Builds a selection from stored labels, dropping blanks and duplicates.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for tag in labels.into_iter().filter_map(|label| Tag::new(label.as_ref())) {
            selection.push(tag);
        }
        selection
    }

    /// Returns `true` if `tag` is selected (ignoring case).
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|selected| selected.same_as(tag))
    }

    /// Appends `tag` at the end unless it is already selected.
    ///
    /// Returns `true` if the selection changed.
    pub fn push(&mut self, tag: Tag) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes the tag matching `text` (ignoring case).
    pub fn remove(&mut self, text: &str) -> Option<Tag> {
        let needle = text.trim().to_lowercase();
        let position = self.tags.iter().position(|tag| tag.key() == needle)?;
        Some(self.tags.remove(position))
    }

    /// Iterates the selected tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns the selected tags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the selected labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.as_str().to_string()).collect()
    }

    /// Number of selected tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_keeps_remaining_order() {
        let mut selection = Selection::from_labels(["SWE", "DBA", "SA"]);
        assert!(selection.remove("dba").is_some());
        assert_eq!(selection.labels(), vec!["SWE", "SA"]);
    }

    #[test]
    fn removing_an_absent_tag_changes_nothing() {
        let mut selection = Selection::from_labels(["SWE"]);
        assert!(selection.remove("SRE").is_none());
        assert_eq!(selection.labels(), vec!["SWE"]);
    }

    #[test]
    fn push_rejects_case_insensitive_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.push(Tag::new("swe").unwrap()));
        assert!(!selection.push(Tag::new("SWE").unwrap()));
        assert_eq!(selection.len(), 1);
    }
}
