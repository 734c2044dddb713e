//! Diff Use Case
//!
//! Renders the catalog and compares the result with the `index.html`
//! already on disk. Essentially a dry run of the build use case that also
//! returns a unified diff.

use std::path::PathBuf;

use similar::{ChangeTag, TextDiff};

use super::build::{BuildOptions, INDEX_FILE};
use crate::domain::entities::Catalog;
use crate::error::FolioResult;
use crate::fs::FileSystem;
use crate::parser::load_catalog;
use crate::render::render_page;

/// Result of the diff operation
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DiffResult {
    pub path: PathBuf,
    /// Whether the page exists on disk yet
    pub exists: bool,
    pub additions: usize,
    pub deletions: usize,
    /// Unified diff, empty when nothing changed
    #[serde(skip)]
    pub unified: String,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Summary such as "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Diff Use Case
pub struct DiffUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> DiffUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(&self, options: &BuildOptions) -> FolioResult<DiffResult> {
        let catalog = load_catalog(&options.catalog)?;
        self.diff_catalog(&catalog, options)
    }

    pub fn diff_catalog(&self, catalog: &Catalog, options: &BuildOptions) -> FolioResult<DiffResult> {
        let path = options.index_path();
        let exists = self.file_system.exists(&path);
        let current = if exists {
            self.file_system.read_to_string(&path)?
        } else {
            String::new()
        };
        let rendered = render_page(catalog, &options.render);

        Ok(unified_diff(&current, &rendered, path, exists))
    }
}

/// Line diff between the current and the freshly rendered page
pub fn unified_diff(old: &str, new: &str, path: PathBuf, exists: bool) -> DiffResult {
    let text_diff = TextDiff::from_lines(old, new);

    let mut additions = 0;
    let mut deletions = 0;
    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => additions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    let unified = if additions + deletions > 0 {
        let old_header = if exists {
            format!("a/{}", INDEX_FILE)
        } else {
            "/dev/null".to_string()
        };
        text_diff
            .unified_diff()
            .context_radius(3)
            .header(&old_header, &format!("b/{}", INDEX_FILE))
            .to_string()
    } else {
        String::new()
    };

    DiffResult {
        path,
        exists,
        additions,
        deletions,
        unified,
    }
}
