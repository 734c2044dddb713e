//! GitHub Actions workflow commands, emitted alongside normal output in CI

use folio::domain::services::{AuditCheck, CheckStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// `::error file=..,title=Folio::message`
pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape(file)));
    }
    props.push("title=Folio".to_string());

    format!("::{} {}::{}", level_str, props.join(","), escape(message))
}

/// Annotation for a failing or warning audit check, none for a pass
pub fn check_annotation(check: &AuditCheck, catalog: &str) -> Option<String> {
    let level = match check.status {
        CheckStatus::Pass => return None,
        CheckStatus::Warning => AnnotationLevel::Warning,
        CheckStatus::Error => AnnotationLevel::Error,
    };
    let message = format!("{}: {}", check.subject, check.message);
    Some(github_actions_annotation(level, &message, Some(catalog)))
}

pub fn is_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
