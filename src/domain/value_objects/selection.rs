//! Selection value object - which tag filter, if any, is active
//!
//! Two states only: `Unfiltered` (matches every project) and
//! `FilteredBy(tag)`. Any tag is representable, including one that no
//! project carries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tag;

/// Label shown for the unfiltered state
pub const ALL_LABEL: &str = "All";

/// Current filter selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "tag", rename_all = "snake_case")]
pub enum Selection {
    /// No filter: every project is visible
    #[default]
    Unfiltered,
    /// Only projects carrying this tag are visible
    FilteredBy(Tag),
}

impl Selection {
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Selection::Unfiltered => None,
            Selection::FilteredBy(tag) => Some(tag),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        matches!(self, Selection::Unfiltered)
    }

    /// Whether a record with these tags passes the filter
    pub fn admits(&self, tags: &[Tag]) -> bool {
        match self {
            Selection::Unfiltered => true,
            Selection::FilteredBy(tag) => tags.contains(tag),
        }
    }

    /// Label for filter controls ("All" or the tag itself)
    pub fn label(&self) -> &str {
        match self {
            Selection::Unfiltered => ALL_LABEL,
            Selection::FilteredBy(tag) => tag.as_str(),
        }
    }
}

impl From<Tag> for Selection {
    fn from(tag: Tag) -> Self {
        Selection::FilteredBy(tag)
    }
}

impl From<Option<Tag>> for Selection {
    fn from(tag: Option<Tag>) -> Self {
        match tag {
            Some(tag) => Selection::FilteredBy(tag),
            None => Selection::Unfiltered,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unfiltered() {
        assert_eq!(Selection::default(), Selection::Unfiltered);
        assert!(Selection::default().tag().is_none());
    }

    #[test]
    fn unfiltered_admits_everything() {
        assert!(Selection::Unfiltered.admits(&[]));
        assert!(Selection::Unfiltered.admits(&[Tag::from("AI")]));
    }

    #[test]
    fn filtered_admits_only_matching_tags() {
        let sel = Selection::from(Tag::from("AI"));
        assert!(sel.admits(&[Tag::from("Image"), Tag::from("AI")]));
        assert!(!sel.admits(&[Tag::from("Utility")]));
        assert!(!sel.admits(&[]));
    }

    #[test]
    fn from_option() {
        assert_eq!(Selection::from(None), Selection::Unfiltered);
        assert_eq!(
            Selection::from(Some(Tag::from("Quiz"))),
            Selection::FilteredBy(Tag::from("Quiz"))
        );
    }

    #[test]
    fn label_and_display() {
        assert_eq!(Selection::Unfiltered.to_string(), "All");
        assert_eq!(Selection::from(Tag::from("Chat")).label(), "Chat");
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(Selection::from(Tag::from("AI"))).unwrap();
        assert_eq!(json, serde_json::json!({"state": "filtered_by", "tag": "AI"}));

        let json = serde_json::to_value(Selection::Unfiltered).unwrap();
        assert_eq!(json, serde_json::json!({"state": "unfiltered"}));
    }
}
