use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use folio::presentation::create_diff_use_case;
use folio::BuildOptions;

use super::CommandContext;

pub fn cmd_diff(
    ctx: &CommandContext,
    catalog: Option<PathBuf>,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<ExitCode> {
    let options = BuildOptions::new(ctx.catalog_path(catalog), ctx.out_dir(out))
        .with_render(ctx.render_options(tag, None, false));
    let result = create_diff_use_case().execute(&options)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "diff",
            "path": result.path,
            "exists": result.exists,
            "additions": result.additions,
            "deletions": result.deletions,
            "changed": result.has_changes(),
        }))?;
    } else {
        print!(
            "{}",
            crate::ui::views::diff::render_diff(&result, ctx.ui.color, ctx.ui.unicode)
        );
    }

    Ok(ExitCode::SUCCESS)
}
