//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Load and validate the catalog
//! 2. Render the page
//! 3. Compare with the page already on disk
//! 4. Write `index.html` only when the content changed

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::domain::entities::Catalog;
use crate::domain::services::filtered_projects;
use crate::domain::value_objects::ContentHash;
use crate::error::FolioResult;
use crate::fs::FileSystem;
use crate::parser::load_catalog_with_warnings;
use crate::render::{render_page, RenderOptions};

/// File name of the generated page inside the output directory
pub const INDEX_FILE: &str = "index.html";

/// Options for the build operation
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Catalog file (TOML or YAML)
    pub catalog: PathBuf,
    /// Directory receiving `index.html`
    pub out_dir: PathBuf,
    pub render: RenderOptions,
    /// Render and compare, but never write
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new(catalog: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            out_dir: out_dir.into(),
            render: RenderOptions::default(),
            dry_run: false,
        }
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Path of the generated page
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }
}

/// What happened to `index.html`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    Written,
    /// Existing file already had identical content
    Unchanged,
    /// Dry run: content differs, nothing written
    WouldWrite,
}

/// Result of the build operation
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    pub path: PathBuf,
    pub status: WriteStatus,
    pub hash: ContentHash,
    pub bytes: usize,
    pub projects: usize,
    pub contributors: usize,
    pub tags: usize,
    /// Projects visible under the initial selection
    pub visible: usize,
    /// Catalog keys no record understands, as dotted paths
    pub unknown_keys: Vec<String>,
}

impl BuildResult {
    pub fn was_written(&self) -> bool {
        self.status == WriteStatus::Written
    }
}

/// Build Use Case
pub struct BuildUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> BuildUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Load the catalog from disk, then build it
    pub fn execute(&self, options: &BuildOptions) -> FolioResult<BuildResult> {
        let (catalog, unknown) = load_catalog_with_warnings(&options.catalog)?;
        let mut result = self.build_catalog(&catalog, options)?;
        result.unknown_keys = unknown.into_iter().map(|k| k.path).collect();
        Ok(result)
    }

    /// Render an already validated catalog and write it
    pub fn build_catalog(&self, catalog: &Catalog, options: &BuildOptions) -> FolioResult<BuildResult> {
        let html = render_page(catalog, &options.render);
        let hash = ContentHash::from_content(&html);
        let path = options.index_path();

        let status = if self.is_current(&path, &hash) {
            debug!("{} is up to date ({})", path.display(), hash.short());
            WriteStatus::Unchanged
        } else if options.dry_run {
            WriteStatus::WouldWrite
        } else {
            self.file_system.write(&path, &html)?;
            info!("wrote {} ({} bytes)", path.display(), html.len());
            WriteStatus::Written
        };

        Ok(BuildResult {
            path,
            status,
            hash,
            bytes: html.len(),
            projects: catalog.projects().len(),
            contributors: catalog.contributors().len(),
            tags: catalog.tags().len(),
            visible: filtered_projects(catalog.projects(), &options.render.selection).len(),
            unknown_keys: Vec::new(),
        })
    }

    fn is_current(&self, path: &Path, hash: &ContentHash) -> bool {
        self.file_system.exists(path)
            && self
                .file_system
                .hash_file(path)
                .map(|existing| &existing == hash)
                .unwrap_or(false)
    }
}
