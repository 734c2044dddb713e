//! Catalog entity - the validated, read-only collection of records
//!
//! A `Catalog` can only be obtained through `Catalog::new`, which enforces:
//! - project titles are non-empty and unique
//! - every project has at least one tag (so it is reachable from some filter)
//! - required URLs are present and every URL field is absolute http(s)
//! - contributor names are non-empty

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use super::{Contributor, Project, Site};
use crate::domain::services::filter;
use crate::domain::value_objects::{is_absolute_http_url, Tag};
use crate::error::{FolioError, FolioResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    site: Site,
    contributors: Vec<Contributor>,
    projects: Vec<Project>,
}

impl Catalog {
    /// Normalize blank optional fields to absent, then validate.
    pub fn new(
        mut site: Site,
        mut contributors: Vec<Contributor>,
        mut projects: Vec<Project>,
    ) -> FolioResult<Self> {
        site.normalize();
        contributors.iter_mut().for_each(Contributor::normalize);
        projects.iter_mut().for_each(Project::normalize);

        validate_site(&site)?;
        for (idx, contributor) in contributors.iter().enumerate() {
            validate_contributor(idx, contributor)?;
        }
        validate_projects(&projects)?;

        debug!(
            "catalog validated: {} contributors, {} projects",
            contributors.len(),
            projects.len()
        );

        Ok(Self {
            site,
            contributors,
            projects,
        })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by its identity key
    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }

    /// Distinct project tags in first-seen order
    pub fn tags(&self) -> Vec<Tag> {
        filter::derive_tags(&self.projects)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.contributors.is_empty()
    }
}

fn check_url(record: &str, field: &str, value: Option<&str>) -> FolioResult<()> {
    match value {
        Some(url) if !is_absolute_http_url(url) => Err(FolioError::InvalidUrl {
            record: record.to_string(),
            field: field.to_string(),
            value: url.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_tags(record: &str, tags: &[Tag]) -> FolioResult<()> {
    if tags.iter().any(Tag::is_blank) {
        return Err(FolioError::MissingField {
            record: record.to_string(),
            field: "tags".to_string(),
        });
    }
    Ok(())
}

fn validate_site(site: &Site) -> FolioResult<()> {
    if site.title.trim().is_empty() {
        return Err(FolioError::MissingField {
            record: "site".to_string(),
            field: "title".to_string(),
        });
    }
    check_url("site", "homepage", site.homepage.as_deref())
}

fn validate_contributor(idx: usize, c: &Contributor) -> FolioResult<()> {
    if c.name.trim().is_empty() {
        return Err(FolioError::MissingField {
            record: format!("contributor #{}", idx + 1),
            field: "name".to_string(),
        });
    }
    let record = format!("contributor '{}'", c.name);
    check_url(&record, "website", c.website.as_deref())?;
    check_url(&record, "avatar", c.avatar_url.as_deref())?;
    check_tags(&record, &c.tags)
}

fn validate_projects(projects: &[Project]) -> FolioResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(projects.len());

    for (idx, p) in projects.iter().enumerate() {
        if p.title.trim().is_empty() {
            return Err(FolioError::MissingField {
                record: format!("project #{}", idx + 1),
                field: "title".to_string(),
            });
        }
        if !seen.insert(p.title.as_str()) {
            return Err(FolioError::DuplicateTitle {
                title: p.title.clone(),
            });
        }

        let record = format!("project '{}'", p.title);
        if p.github_url.trim().is_empty() {
            return Err(FolioError::MissingField {
                record,
                field: "github".to_string(),
            });
        }
        check_url(&record, "github", Some(&p.github_url))?;
        check_url(&record, "demo", p.demo_url.as_deref())?;

        if p.tags.is_empty() {
            return Err(FolioError::EmptyProjectTags {
                title: p.title.clone(),
            });
        }
        check_tags(&record, &p.tags)?;
    }

    Ok(())
}
