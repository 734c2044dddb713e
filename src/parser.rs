//! Catalog loader
//!
//! Reads a catalog file (TOML or YAML, chosen by extension) and turns it
//! into a validated `Catalog`. Unknown keys are not fatal; they are
//! collected so the CLI can point at typos.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::domain::entities::{Catalog, Contributor, Project, Site};
use crate::error::{FolioError, FolioResult};

/// Supported catalog serializations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "toml" => Ok(CatalogFormat::Toml),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(FolioError::UnsupportedCatalogFormat {
                extension: ext,
                file: path.to_path_buf(),
            }),
        }
    }
}

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    site: Site,
    #[serde(default)]
    contributors: Vec<Contributor>,
    #[serde(default)]
    projects: Vec<Project>,
}

/// Key present in the catalog file that no record understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    /// Dotted path, e.g. `projects.2.demoUrl`
    pub path: String,
    pub file: PathBuf,
}

/// Load and validate a catalog file
pub fn load_catalog(path: &Path) -> FolioResult<Catalog> {
    load_catalog_with_warnings(path).map(|(catalog, _)| catalog)
}

/// Load and validate a catalog file, also returning unknown keys
pub fn load_catalog_with_warnings(path: &Path) -> FolioResult<(Catalog, Vec<UnknownKey>)> {
    if !path.is_file() {
        return Err(FolioError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    debug!("loading catalog {} ({:?})", path.display(), format);

    let (catalog, unknown) = parse_catalog_str(&content, format, path)?;
    info!(
        "loaded catalog {}: {} projects, {} contributors",
        path.display(),
        catalog.projects().len(),
        catalog.contributors().len()
    );
    Ok((catalog, unknown))
}

/// Parse catalog text. `file` is only used for error messages.
pub fn parse_catalog_str(
    content: &str,
    format: CatalogFormat,
    file: &Path,
) -> FolioResult<(Catalog, Vec<UnknownKey>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let on_unknown = |p: serde_ignored::Path<'_>| unknown_paths.push(p.to_string());

    let invalid = |message: String| FolioError::InvalidCatalog {
        file: file.to_path_buf(),
        message,
    };

    let document: CatalogDocument = match format {
        CatalogFormat::Toml => {
            let de = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(de, on_unknown).map_err(|e| invalid(e.to_string()))?
        }
        CatalogFormat::Yaml => {
            if content.trim().is_empty() {
                CatalogDocument::default()
            } else {
                let de = serde_yaml_ng::Deserializer::from_str(content);
                serde_ignored::deserialize(de, on_unknown).map_err(|e| invalid(e.to_string()))?
            }
        }
    };

    let catalog = Catalog::new(document.site, document.contributors, document.projects)?;
    let unknown = unknown_paths
        .into_iter()
        .map(|path| UnknownKey {
            path,
            file: file.to_path_buf(),
        })
        .collect();
    Ok((catalog, unknown))
}
