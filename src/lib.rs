//! Folio - portfolio catalog compiler
//!
//! Folio keeps a team's contributors and projects in one catalog file
//! (TOML or YAML) and compiles it into a single static `index.html` with
//! a tag filter, light/dark theming and staggered entry animations. The
//! page needs no JavaScript: filtering is driven by CSS rules computed
//! ahead of time by the filter engine.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod render;

/// Crate version, embedded in generated pages
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, WriteStatus};
pub use config::Config;
pub use domain::entities::{Catalog, Contributor, Project, Site};
pub use domain::services::{derive_tags, filtered_projects, FilterState};
pub use domain::value_objects::{AnimationConfig, Selection, Tag, ThemeMode};
pub use error::{FolioError, FolioResult};
pub use parser::{load_catalog, parse_catalog_str, CatalogFormat};
pub use render::{render_page, RenderOptions};
