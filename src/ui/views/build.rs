use std::path::Path;

use folio::application::{BuildResult, WriteStatus};
use folio::config::ConfigWarning;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    catalog: &Path,
    out_dir: &Path,
    selection: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Folio Build");
    header.add("Catalog", catalog.display().to_string());
    header.add("Output", out_dir.display().to_string());
    header.add("Filter", selection);
    if dry_run {
        header.add("Mode", "dry run (nothing is written)");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_build_result(
    result: &BuildResult,
    config_warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = match result.status {
        WriteStatus::Written => ResultSummary::success("Build Complete"),
        WriteStatus::Unchanged => ResultSummary::success("Already up to date"),
        WriteStatus::WouldWrite => ResultSummary::partial("Dry run: page would change"),
    };

    summary.add_stat("projects", result.projects);
    summary.add_stat("contributors", result.contributors);
    summary.add_stat("tags", result.tags);
    summary.add_stat("bytes", result.bytes);

    for key in &result.unknown_keys {
        summary.add_warning(format!("unknown catalog key '{}' ignored", key));
    }
    for warning in config_warnings {
        let mut line = format!("{}: {}", file_name(&warning.file), warning.message());
        if let Some(suggestion) = &warning.suggestion {
            line.push_str(&format!(", did you mean '{}'?", suggestion));
        }
        summary.add_warning(line);
    }

    match result.status {
        WriteStatus::WouldWrite => summary.with_next_step("Run without --dry-run to write the page"),
        _ => summary.with_next_step(format!("Open {}", result.path.display())),
    }

    summary.render(supports_color, supports_unicode)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::domain::value_objects::ContentHash;
    use std::path::PathBuf;

    fn result(status: WriteStatus) -> BuildResult {
        BuildResult {
            path: PathBuf::from("dist/index.html"),
            status,
            hash: ContentHash::from_content("x"),
            bytes: 1,
            projects: 9,
            contributors: 3,
            tags: 10,
            visible: 9,
            unknown_keys: vec!["site.colour".to_string()],
        }
    }

    #[test]
    fn written_build_points_at_page() {
        let rendered = render_build_result(&result(WriteStatus::Written), &[], false, false);
        assert!(rendered.contains("[OK] Build Complete"));
        assert!(rendered.contains("9 projects"));
        assert!(rendered.contains("Open dist/index.html"));
        assert!(rendered.contains("unknown catalog key 'site.colour'"));
    }

    #[test]
    fn dry_run_is_a_partial_result() {
        let rendered = render_build_result(&result(WriteStatus::WouldWrite), &[], false, false);
        assert!(rendered.contains("[WARN] Dry run"));
        assert!(rendered.contains("--dry-run"));
    }

    #[test]
    fn config_warnings_show_file_and_suggestion() {
        let warning = ConfigWarning {
            key: "out_dri".to_string(),
            file: PathBuf::from("/site/folio.toml"),
            line: Some(2),
            suggestion: Some("out_dir".to_string()),
        };
        let rendered = render_build_result(&result(WriteStatus::Unchanged), &[warning], false, false);
        assert!(rendered.contains("folio.toml: unknown key 'out_dri' (line 2), did you mean 'out_dir'?"));
    }

    #[test]
    fn header_mentions_dry_run() {
        let rendered = render_build_header(
            Path::new("catalog.toml"),
            Path::new("dist"),
            "All",
            true,
            false,
            false,
        );
        assert!(rendered.contains("Filter: All"));
        assert!(rendered.contains("Mode: dry run"));
    }
}
