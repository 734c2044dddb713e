use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use folio::domain::value_objects::ThemeMode;
use folio::presentation::create_build_use_case;
use folio::BuildOptions;

use super::{display_path, CommandContext};

#[allow(clippy::too_many_arguments)]
pub fn cmd_build(
    ctx: &CommandContext,
    catalog: Option<PathBuf>,
    out: Option<PathBuf>,
    tag: Option<String>,
    theme: Option<ThemeMode>,
    no_animation: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let catalog = ctx.catalog_path(catalog);
    let out_dir = ctx.out_dir(out);
    let render = ctx.render_options(tag, theme, no_animation);
    let ui = &ctx.ui;

    if !ctx.is_quiet() {
        print!(
            "{}",
            crate::ui::views::build::render_build_header(
                &catalog,
                &out_dir,
                render.selection.label(),
                dry_run,
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    let options = BuildOptions::new(&catalog, &out_dir)
        .with_render(render)
        .with_dry_run(dry_run);
    let mut result = create_build_use_case(&ctx.config).execute(&options)?;

    if ui.json {
        for warning in &ctx.config_warnings {
            crate::ui::json::emit_event("config_warning", warning)?;
        }
        crate::ui::json::emit_event("build", &result)?;
    } else if !ctx.is_quiet() {
        result.path = PathBuf::from(display_path(ctx, &result.path));
        print!(
            "{}",
            crate::ui::views::build::render_build_result(
                &result,
                &ctx.config_warnings,
                ui.color,
                ui.unicode,
            )
        );
    }

    Ok(ExitCode::SUCCESS)
}
