//! Check Use Case
//!
//! Validates a catalog file and audits it for presentation fallbacks.
//! A catalog that fails to load becomes a single error check rather than
//! an `Err`, so the CLI can report it like any other finding.

use std::path::PathBuf;

use log::debug;

use crate::domain::services::{audit_catalog, AuditCheck, AuditReport};
use crate::error::FolioError;
use crate::parser::load_catalog_with_warnings;

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub catalog: PathBuf,
    /// Treat warnings as errors
    pub strict_warnings: bool,
}

impl CheckOptions {
    pub fn new(catalog: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            strict_warnings: false,
        }
    }

    pub fn with_strict_warnings(mut self, strict: bool) -> Self {
        self.strict_warnings = strict;
        self
    }
}

/// Result of the check operation
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckResult {
    pub catalog: PathBuf,
    pub report: AuditReport,
    pub strict_warnings: bool,
}

impl CheckResult {
    /// No errors, and no warnings when running strict
    pub fn is_success(&self) -> bool {
        self.report.is_success() && !(self.strict_warnings && self.report.warnings() > 0)
    }

    /// Check if all checks passed with no warnings
    pub fn is_clean(&self) -> bool {
        self.report.errors() == 0 && self.report.warnings() == 0
    }
}

/// Check Use Case
#[derive(Debug, Default)]
pub struct CheckUseCase;

impl CheckUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, options: &CheckOptions) -> CheckResult {
        let report = match load_catalog_with_warnings(&options.catalog) {
            Ok((catalog, unknown)) => {
                let mut report = audit_catalog(&catalog);
                for key in unknown {
                    report.add(AuditCheck::warning(
                        "catalog",
                        "unknown-key",
                        format!("unknown key '{}' is ignored", key.path),
                        "Check the spelling against the catalog format",
                    ));
                }
                report
            }
            Err(e) => {
                debug!("catalog failed to load: {}", e);
                let mut report = AuditReport::default();
                report.add(load_failure(&e));
                report
            }
        };

        CheckResult {
            catalog: options.catalog.clone(),
            report,
            strict_warnings: options.strict_warnings,
        }
    }
}

fn load_failure(error: &FolioError) -> AuditCheck {
    let name = match error {
        FolioError::CatalogNotFound { .. } => "exists",
        FolioError::UnsupportedCatalogFormat { .. } => "format",
        FolioError::InvalidCatalog { .. } | FolioError::Toml(_) | FolioError::Yaml(_) => "syntax",
        _ => "validation",
    };
    let mut check = AuditCheck::error("catalog", name, error.to_string());
    if let FolioError::CatalogNotFound { .. } = error {
        check.recommendation = Some("Run `folio init` to create a starter catalog".to_string());
    }
    check
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::CheckStatus;
    use std::fs;
    use tempfile::tempdir;

    const COMPLETE: &str = r#"
[[contributors]]
name = "Sudharshan S"
github = "sudharshans2009"
avatar = "https://github.com/sudharshans2009.png"
tags = ["Lead Developer"]

[[projects]]
title = "Weather App"
github = "https://github.com/o/weather"
demo = "https://weather.example"
tags = ["Weather"]
"#;

    #[test]
    fn complete_catalog_is_clean() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, COMPLETE).unwrap();

        let result = CheckUseCase::new().execute(&CheckOptions::new(&path));
        assert!(result.is_clean());
        assert!(result.is_success());
    }

    #[test]
    fn missing_catalog_is_an_error_check() {
        let dir = tempdir().unwrap();
        let result =
            CheckUseCase::new().execute(&CheckOptions::new(dir.path().join("catalog.toml")));

        assert!(!result.is_success());
        let check = &result.report.checks[0];
        assert_eq!(check.status, CheckStatus::Error);
        assert_eq!(check.name, "exists");
        assert!(check.recommendation.is_some());
    }

    #[test]
    fn validation_failure_is_an_error_check() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[projects]]\ntitle = \"X\"\ngithub = \"https://github.com/o/x\"\n",
        )
        .unwrap();

        let result = CheckUseCase::new().execute(&CheckOptions::new(&path));
        assert_eq!(result.report.errors(), 1);
        assert_eq!(result.report.checks[0].name, "validation");
    }

    #[test]
    fn strict_warnings_fail_on_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(
            &path,
            "projects:\n  - title: Quiz\n    github: https://github.com/o/quiz\n    tags: [Quiz]\n",
        )
        .unwrap();

        let lenient = CheckUseCase::new().execute(&CheckOptions::new(&path));
        assert!(lenient.is_success());
        assert!(!lenient.is_clean());

        let strict =
            CheckUseCase::new().execute(&CheckOptions::new(&path).with_strict_warnings(true));
        assert!(!strict.is_success());
    }

    #[test]
    fn unknown_keys_are_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, format!("{}\nthemes = 1\n", COMPLETE)).unwrap();

        let result = CheckUseCase::new().execute(&CheckOptions::new(&path));
        assert!(result
            .report
            .checks
            .iter()
            .any(|c| c.name == "unknown-key" && c.status == CheckStatus::Warning));
    }
}
