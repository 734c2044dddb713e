use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use folio::application::{CheckOptions, CheckUseCase};

use super::{display_path, CommandContext};
use crate::ui::ci;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

/// Exit code is non-zero when any check fails (or warns, with `--strict-warnings`)
pub fn cmd_check(
    ctx: &CommandContext,
    catalog: Option<PathBuf>,
    strict_warnings: bool,
) -> Result<ExitCode> {
    let catalog = ctx.catalog_path(catalog);
    let options = CheckOptions::new(&catalog).with_strict_warnings(strict_warnings);
    let mut result = CheckUseCase::new().execute(&options);
    for check in ctx.config_checks() {
        result.report.add(check);
    }
    let ui = &ctx.ui;

    if ui.json {
        crate::ui::json::emit_event("check", &result)?;
    } else {
        result.catalog = PathBuf::from(display_path(ctx, &result.catalog));
        if ci::is_github_actions() {
            let file = result.catalog.display().to_string();
            for annotation in result
                .report
                .checks
                .iter()
                .filter_map(|check| ci::check_annotation(check, &file))
            {
                println!("{}", annotation);
            }
        }

        print!("{}", render_check_header(&result, ui.color, ui.unicode));
        println!();
        let report = render_check_report(&result, ui.verbose, ui.color, ui.unicode);
        if !report.is_empty() {
            println!("{}", report);
        }
        print!("{}", render_check_summary(&result, ui.color, ui.unicode));
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
