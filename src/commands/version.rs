use std::process::ExitCode;

use anyhow::Result;

use super::CommandContext;

pub fn cmd_version(ctx: &CommandContext) -> Result<ExitCode> {
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "version": folio::VERSION,
        }))?;
    } else {
        print!(
            "{}",
            crate::ui::views::version::render_version(folio::VERSION, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(ExitCode::SUCCESS)
}
