//! Site entity - page chrome around the catalog

use serde::{Deserialize, Serialize};

/// Navbar brand, hero copy and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Navbar brand and `<title>`
    pub title: String,
    /// Hero heading
    pub heading: String,
    /// Hero paragraph
    pub tagline: String,
    pub footer: String,
    /// Navbar "Main Website" link (absolute URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            heading: "Portfolio".to_string(),
            tagline: String::new(),
            footer: String::new(),
            homepage: None,
        }
    }
}

impl Site {
    pub(crate) fn normalize(&mut self) {
        if self.homepage.as_deref().is_some_and(|v| v.trim().is_empty()) {
            self.homepage = None;
        }
        if self.heading.trim().is_empty() {
            self.heading = self.title.clone();
        }
    }
}
