//! Tag value type.
//!
//! A [`Tag`] is a short, non-empty category label ("role") attached to a
//! candidate. Identity is case-insensitive while the casing the user typed is
//! preserved for storage and display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty, trimmed tag label.
///
/// Two tags are the same tag when their lower-cased forms are equal. The
/// derived `PartialEq` compares the exact text; use [`Tag::same_as`] or
/// [`Tag::matches`] for identity checks.
///
/// # Examples
///
/// ```
/// use role_tagger::domain::Tag;
///
/// let tag = Tag::new("  Cloud SWE ").unwrap();
/// assert_eq!(tag.as_str(), "Cloud SWE");
/// assert!(tag.matches("cloud swe"));
/// assert!(Tag::new("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Creates a tag from raw text, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing remains after trimming. No other validation
    /// is applied: length and character set are unrestricted.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the label with its original casing.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lower-cased identity key of this tag.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Returns `true` if `other` is the same tag ignoring case.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }

    /// Returns `true` if `text`, trimmed, is this tag ignoring case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.0.to_lowercase() == text.trim().to_lowercase()
    }

    /// Consumes the tag and returns the owned label.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| "tag must not be blank".to_string())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_case_but_keeps_casing() {
        let a = Tag::new("DevOps").unwrap();
        let b = Tag::new("DEVOPS").unwrap();
        assert!(a.same_as(&b));
        assert_eq!(a.as_str(), "DevOps");
        assert_eq!(a.key(), "devops");
    }

    #[test]
    fn blank_text_is_not_a_tag() {
        assert!(Tag::new("").is_none());
        assert!(Tag::new(" \t\n").is_none());
    }

    #[test]
    fn deserializing_a_blank_tag_fails() {
        let result: Result<Tag, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
        let tag: Tag = serde_json::from_str("\" SRE \"").unwrap();
        assert_eq!(tag.as_str(), "SRE");
    }
}
