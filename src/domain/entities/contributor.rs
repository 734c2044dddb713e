//! Contributor entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ExternalLink, LinkKind, Tag};

/// Role that marks a contributor as featured
pub const LEAD_ROLE: &str = "Lead Developer";

/// A person credited on the page
///
/// Every contact field is optional; absent fields simply produce no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name (required, non-empty)
    pub name: String,

    /// GitHub handle, without the `https://github.com/` prefix
    #[serde(default, rename = "github", skip_serializing_if = "Option::is_none")]
    pub github_handle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Personal website (absolute URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Avatar image (absolute URL); the page falls back to the name initial
    #[serde(default, rename = "avatar", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Role labels in display order
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Contributor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            github_handle: None,
            email: None,
            website: None,
            avatar_url: None,
            tags: Vec::new(),
        }
    }

    pub fn with_github(mut self, handle: impl Into<String>) -> Self {
        self.github_handle = Some(handle.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
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

    /// Fallback avatar glyph: first character of the name
    pub fn initial(&self) -> char {
        self.name.trim_start().chars().next().unwrap_or('?')
    }

    /// Featured contributors get the highlighted card style
    pub fn is_featured(&self) -> bool {
        self.tags.iter().any(|t| t == LEAD_ROLE)
    }

    /// Contact links in display order: GitHub, Email, Website
    pub fn links(&self) -> Vec<ExternalLink> {
        let mut links = Vec::new();
        if let Some(handle) = &self.github_handle {
            links.push(ExternalLink::github_profile(handle));
        }
        if let Some(email) = &self.email {
            links.push(ExternalLink::mailto(email));
        }
        if let Some(website) = &self.website {
            links.push(ExternalLink::verbatim(LinkKind::Website, website));
        }
        links
    }

    /// Treat blank optional strings as absent
    pub(crate) fn normalize(&mut self) {
        for field in [
            &mut self.github_handle,
            &mut self.email,
            &mut self.website,
            &mut self.avatar_url,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
    }
}
