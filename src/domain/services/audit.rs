//! Catalog audit for `folio check`
//!
//! A catalog that loaded is already structurally valid. The audit reports
//! the softer gaps the page papers over with fallbacks, so authors can see
//! what visitors will get.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::Catalog;
use crate::domain::services::filter::tag_counts;
use crate::domain::value_objects::Tag;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "pass"),
            CheckStatus::Warning => write!(f, "warning"),
            CheckStatus::Error => write!(f, "error"),
        }
    }
}

/// One audit line, grouped in output by `subject`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditCheck {
    /// Record the check is about ("contributor 'Akash P'", "catalog", ...)
    pub subject: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl AuditCheck {
    fn pass(subject: impl Into<String>, name: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: name.to_string(),
            status: CheckStatus::Pass,
            message: message.into(),
            recommendation: None,
        }
    }

    pub fn warning(
        subject: impl Into<String>,
        name: &str,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.into(),
            recommendation: Some(recommendation.into()),
        }
    }

    pub fn error(subject: impl Into<String>, name: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.into(),
            recommendation: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    pub checks: Vec<AuditCheck>,
}

impl AuditReport {
    pub fn add(&mut self, check: AuditCheck) {
        self.checks.push(check);
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }
}

/// Audit a loaded catalog
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport::default();

    let projects = catalog.projects();
    let tags = tag_counts(projects);
    report.add(AuditCheck::pass(
        "catalog",
        "structure",
        format!(
            "{} contributors, {} projects, {} tags",
            catalog.contributors().len(),
            projects.len(),
            tags.len()
        ),
    ));
    if projects.is_empty() {
        report.add(AuditCheck::warning(
            "catalog",
            "projects",
            "no projects; the grid will show the empty-state message",
            "Add at least one [[projects]] entry",
        ));
    }

    for c in catalog.contributors() {
        let subject = format!("contributor '{}'", c.name);
        if c.avatar_url.is_none() {
            report.add(AuditCheck::warning(
                &subject,
                "avatar",
                format!("no avatar; the card shows the initial '{}'", c.initial()),
                "Set `avatar` to an image URL",
            ));
        }
        if c.links().is_empty() {
            report.add(AuditCheck::warning(
                &subject,
                "links",
                "no github, email or website; the card has no contact links",
                "Set at least one of `github`, `email`, `website`",
            ));
        }
        if let Some(tag) = repeated_tag(&c.tags) {
            report.add(AuditCheck::warning(
                &subject,
                "tags",
                format!("role '{}' is listed more than once", tag),
                "Remove the duplicate role",
            ));
        }
    }

    for p in projects {
        let subject = format!("project '{}'", p.title);
        if p.demo_url.is_none() {
            report.add(AuditCheck::warning(
                &subject,
                "demo",
                "no demo; the card shows only the GitHub button",
                "Set `demo` to a live URL",
            ));
        }
        if let Some(tag) = repeated_tag(&p.tags) {
            report.add(AuditCheck::warning(
                &subject,
                "tags",
                format!("tag '{}' is listed more than once", tag),
                "Remove the duplicate tag",
            ));
        }
    }

    for (tag, count) in &tags {
        report.add(AuditCheck::pass(
            "filters",
            tag.as_str(),
            format!("{} matching project(s)", count),
        ));
    }

    report
}

fn repeated_tag(tags: &[Tag]) -> Option<&Tag> {
    let mut seen = HashSet::new();
    tags.iter().find(|t| !seen.insert(*t))
}
