//! Tag value object - a short category or role label
//!
//! Tags compare by exact text. `"AI"` and `"ai"` are different tags.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A category label attached to a project, or a role label on a contributor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_compares_case_sensitively() {
        assert_ne!(Tag::from("AI"), Tag::from("ai"));
        assert_eq!(Tag::from("AI"), "AI");
    }

    #[test]
    fn tag_blank_detection() {
        assert!(Tag::from("").is_blank());
        assert!(Tag::from("  ").is_blank());
        assert!(!Tag::from("Utility").is_blank());
    }

    #[test]
    fn tag_serializes_as_plain_string() {
        let json = serde_json::to_string(&Tag::from("Chatbot")).unwrap();
        assert_eq!(json, "\"Chatbot\"");
    }

    #[test]
    fn tag_set_lookup_by_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(Tag::from("Editor"));
        assert!(set.contains("Editor"));
    }
}
