//! Error presentation for the binary

use std::path::Path;

use is_terminal::IsTerminal;

use folio::FolioError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested fix for errors the user can act on
fn fix_for(err: &FolioError) -> Option<String> {
    match err {
        FolioError::CatalogNotFound { .. } => Some(
            "Run `folio init` to create a starter catalog, or pass --catalog <path>.".to_string(),
        ),
        FolioError::UnsupportedCatalogFormat { .. } => {
            Some("Rename the catalog to .toml, .yaml or .yml.".to_string())
        }
        FolioError::DuplicateTitle { .. } => {
            Some("Project titles identify cards; give each project a distinct title.".to_string())
        }
        FolioError::EmptyProjectTags { .. } => {
            Some("Add at least one tag so the project can be reached from a filter.".to_string())
        }
        FolioError::InvalidUrl { .. } => {
            Some("Use a full URL such as https://example.com.".to_string())
        }
        FolioError::InvalidConfig { .. } => {
            Some("Fix folio.toml or delete it to fall back to defaults.".to_string())
        }
        _ => None,
    }
}

pub(crate) fn format_folio_error_with(
    err: &FolioError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("ERROR").bold().render(supports_color),
        err
    );
    if let Some(file) = err.file() {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(file.display().to_string()).render(supports_color)
        ));
    }
    if let Some(fix) = fix_for(err) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("FIX:").bold().render(supports_color),
            fix
        ));
    }
    out
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(folio) = err.downcast_ref::<FolioError>() {
        return format_folio_error_with(folio, supports_color, supports_unicode);
    }

    format!(
        "{} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    )
}

pub fn print_error(err: &anyhow::Error, json: bool, supports_color: bool, supports_unicode: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if crate::ui::ci::is_github_actions() {
        let file = error_file(err).map(|p| p.display().to_string());
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &format!("{:#}", err),
                file.as_deref(),
            )
        );
    }

    eprint!("{}", format_error(err, supports_color, supports_unicode));
}

fn error_file(err: &anyhow::Error) -> Option<&Path> {
    err.downcast_ref::<FolioError>().and_then(|e| e.file())
}

/// Offer to open the offending file in `$VISUAL`/`$EDITOR`
pub fn offer_open_in_editor(err: &anyhow::Error, json: bool) {
    if json || !std::io::stdin().is_terminal() {
        return;
    }
    let Some(file) = error_file(err) else { return };
    if !file.is_file() {
        return;
    }

    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok();
    let Some(editor) = editor else { return };

    eprintln!("\n? Press Enter to open this file in your editor, or Ctrl+C to exit");
    let mut input = String::new();
    let _ = std::io::stdin().read_line(&mut input);
    if !input.trim().is_empty() {
        return;
    }

    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else { return };
    let status = std::process::Command::new(program)
        .args(parts)
        .arg(file)
        .status();
    if let Err(e) = status {
        log::warn!("failed to open editor '{}': {}", program, e);
    }
}
