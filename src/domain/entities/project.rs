//! Project entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ExternalLink, LinkKind, Tag};

/// A card in the filterable project grid
///
/// `title` is the identity key: unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Source repository (absolute URL, required)
    #[serde(rename = "github")]
    pub github_url: String,

    /// Live demo (absolute URL); absent means no "Live Demo" button
    #[serde(default, rename = "demo", skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    /// Category labels, never empty in a valid catalog
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        github_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            github_url: github_url.into(),
            demo_url: None,
            tags: Vec::new(),
        }
    }

    pub fn with_demo(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Action links in display order: Live Demo (if any), then GitHub
    pub fn links(&self) -> Vec<ExternalLink> {
        let mut links = Vec::with_capacity(2);
        if let Some(demo) = &self.demo_url {
            links.push(ExternalLink::verbatim(LinkKind::Demo, demo));
        }
        links.push(ExternalLink::verbatim(LinkKind::Repository, &self.github_url));
        links
    }

    pub(crate) fn normalize(&mut self) {
        if self.demo_url.as_deref().is_some_and(|v| v.trim().is_empty()) {
            self.demo_url = None;
        }
    }
}
