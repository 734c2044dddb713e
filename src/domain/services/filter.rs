//! Tag filter engine
//!
//! Pure functions over the project list plus `FilterState`, the single
//! piece of transient UI state. Nothing here mutates the catalog; calling
//! any function twice with the same inputs yields equal outputs.

use std::collections::HashSet;

use crate::domain::entities::Project;
use crate::domain::value_objects::{Selection, Tag};

/// Distinct tags in first-seen order over a left-to-right scan of each
/// project's tag list.
pub fn derive_tags(projects: &[Project]) -> Vec<Tag> {
    let mut seen: HashSet<&Tag> = HashSet::new();
    let mut tags = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Each derived tag with the number of projects carrying it
pub fn tag_counts(projects: &[Project]) -> Vec<(Tag, usize)> {
    derive_tags(projects)
        .into_iter()
        .map(|tag| {
            let count = projects.iter().filter(|p| p.has_tag(&tag)).count();
            (tag, count)
        })
        .collect()
}

/// Projects visible under `selection`, catalog order preserved.
///
/// Unfiltered returns every project. An unknown tag returns an empty
/// vector, never an error.
pub fn filtered_projects<'a>(projects: &'a [Project], selection: &Selection) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| selection.admits(&p.tags))
        .collect()
}

/// Owned selection state for one UI instance
///
/// Starts unfiltered. `set_filter` replaces the selection without checking
/// it against the derived tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selection: Selection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that starts at `selection` instead of unfiltered
    pub fn with_selection(selection: impl Into<Selection>) -> Self {
        Self {
            selection: selection.into(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection unconditionally
    pub fn set_filter(&mut self, selection: impl Into<Selection>) {
        let next = selection.into();
        log::debug!("filter: {} -> {}", self.selection, next);
        self.selection = next;
    }

    pub fn select(&mut self, tag: impl Into<Tag>) {
        self.set_filter(Selection::FilteredBy(tag.into()));
    }

    pub fn clear(&mut self) {
        self.set_filter(Selection::Unfiltered);
    }

    /// Whether a filter control for `candidate` should render as active
    pub fn is_active(&self, candidate: &Selection) -> bool {
        &self.selection == candidate
    }

    /// Projects visible under the current selection
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filtered_projects(projects, &self.selection)
    }
}
