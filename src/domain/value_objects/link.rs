//! Outbound links supplied to the page
//!
//! Every link opens in a new browsing context. The core only builds the
//! href; following it is the browser's business.

use serde::Serialize;

/// What an outbound link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// `https://github.com/<handle>`
    GithubProfile,
    /// `mailto:<email>`
    Mailto,
    /// Contributor website, verbatim
    Website,
    /// Project live demo, verbatim
    Demo,
    /// Project source repository, verbatim
    Repository,
}

impl LinkKind {
    /// Short caption used as link title / button text
    pub fn caption(&self) -> &'static str {
        match self {
            LinkKind::GithubProfile | LinkKind::Repository => "GitHub",
            LinkKind::Mailto => "Email",
            LinkKind::Website => "Website",
            LinkKind::Demo => "Live Demo",
        }
    }
}

/// A resolved outbound link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub kind: LinkKind,
    pub href: String,
}

impl ExternalLink {
    pub fn github_profile(handle: &str) -> Self {
        Self {
            kind: LinkKind::GithubProfile,
            href: format!("https://github.com/{}", handle),
        }
    }

    pub fn mailto(email: &str) -> Self {
        Self {
            kind: LinkKind::Mailto,
            href: format!("mailto:{}", email),
        }
    }

    /// Link whose href is the URL verbatim
    pub fn verbatim(kind: LinkKind, url: &str) -> Self {
        Self {
            kind,
            href: url.to_string(),
        }
    }

    pub fn caption(&self) -> &'static str {
        self.kind.caption()
    }
}

/// Accepts `http://` and `https://` URLs with a non-empty host part.
pub fn is_absolute_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            !host.is_empty() && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
