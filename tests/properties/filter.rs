//! Property tests for tag derivation and filtering.

use proptest::prelude::*;

use folio::domain::services::{derive_tags, filtered_projects};
use folio::domain::value_objects::{Selection, Tag};

use super::{projects, tag};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: derived tags are distinct and cover every project tag.
    #[test]
    fn property_derived_tags_are_unique_and_complete(projects in projects()) {
        let tags = derive_tags(&projects);
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), tags.len());

        for project in &projects {
            for t in &project.tags {
                prop_assert!(tags.contains(t));
            }
        }
    }

    /// PROPERTY: filtering keeps catalog order and only admits carriers.
    #[test]
    fn property_filter_is_ordered_subset(projects in projects(), label in tag()) {
        let selection = Selection::FilteredBy(Tag::new(label.clone()));
        let visible = filtered_projects(&projects, &selection);

        let expected: Vec<&str> = projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t.as_str() == label))
            .map(|p| p.title.as_str())
            .collect();
        let actual: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: unfiltered shows everything; every derived tag shows something.
    #[test]
    fn property_every_derived_tag_matches(projects in projects()) {
        prop_assert_eq!(filtered_projects(&projects, &Selection::Unfiltered).len(), projects.len());
        for t in derive_tags(&projects) {
            prop_assert!(!filtered_projects(&projects, &Selection::FilteredBy(t)).is_empty());
        }
    }

    /// PROPERTY: derived tags appear in first-seen order over a left-to-right scan.
    #[test]
    fn property_derived_tags_keep_first_seen_order(projects in projects()) {
        let mut expected: Vec<Tag> = Vec::new();
        for project in &projects {
            for t in &project.tags {
                if !expected.contains(t) {
                    expected.push(t.clone());
                }
            }
        }
        prop_assert_eq!(derive_tags(&projects), expected);
    }

    /// PROPERTY: filtering twice gives the same answer and leaves the catalog untouched.
    #[test]
    fn property_filter_is_idempotent_and_pure(projects in projects(), label in proptest::option::of(tag())) {
        let before = projects.clone();
        let selection = Selection::from(label.map(Tag::new));

        let first = filtered_projects(&projects, &selection);
        let second = filtered_projects(&projects, &selection);
        prop_assert_eq!(&first, &second);

        let unfiltered = filtered_projects(&projects, &Selection::Unfiltered);
        prop_assert_eq!(unfiltered.len(), projects.len());
        prop_assert_eq!(&projects, &before);
    }
}
