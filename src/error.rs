//! Error types for Folio
//!
//! Library code returns `FolioResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Catalog file does not exist
    #[error("catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog file extension is not one we can parse
    #[error("unsupported catalog format '{extension}' for {file} (expected .toml, .yaml or .yml)")]
    UnsupportedCatalogFormat { extension: String, file: PathBuf },

    /// Catalog could not be deserialized
    #[error("invalid catalog {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// Required field is present but empty
    #[error("{record}: field '{field}' must not be empty")]
    MissingField { record: String, field: String },

    /// Two projects share the same title
    #[error("duplicate project title '{title}'")]
    DuplicateTitle { title: String },

    /// Project declares no tags and would be unreachable from any filter
    #[error("project '{title}' has no tags")]
    EmptyProjectTags { title: String },

    /// URL field is not an absolute http(s) URL
    #[error("{record}: field '{field}' is not an absolute http(s) URL: '{value}'")]
    InvalidUrl {
        record: String,
        field: String,
        value: String,
    },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FolioError {
    /// File associated with the error, when there is one
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            FolioError::CatalogNotFound { path } => Some(path),
            FolioError::UnsupportedCatalogFormat { file, .. }
            | FolioError::InvalidCatalog { file, .. }
            | FolioError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_duplicate_title() {
        let err = FolioError::DuplicateTitle {
            title: "Paint Canvas".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate project title 'Paint Canvas'");
    }

    #[test]
    fn test_error_display_invalid_url() {
        let err = FolioError::InvalidUrl {
            record: "project 'Quiz'".to_string(),
            field: "demo".to_string(),
            value: "quiz.example".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "project 'Quiz': field 'demo' is not an absolute http(s) URL: 'quiz.example'"
        );
    }

    #[test]
    fn test_error_file_points_at_catalog() {
        let err = FolioError::CatalogNotFound {
            path: PathBuf::from("site/catalog.toml"),
        };
        assert_eq!(err.file(), Some(std::path::Path::new("site/catalog.toml")));
        assert!(FolioError::Watch("boom".into()).file().is_none());
    }
}
