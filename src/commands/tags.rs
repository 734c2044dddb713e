use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use folio::domain::services::tag_counts;
use folio::domain::value_objects::Selection;
use folio::load_catalog;

use super::CommandContext;

pub fn cmd_tags(ctx: &CommandContext, catalog: Option<PathBuf>) -> Result<ExitCode> {
    let catalog = load_catalog(&ctx.catalog_path(catalog))?;
    let counts = tag_counts(catalog.projects());
    let total = catalog.projects().len();

    if ctx.ui.json {
        let tags: Vec<serde_json::Value> = counts
            .iter()
            .map(|(tag, count)| serde_json::json!({ "tag": tag, "count": count }))
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "tags",
            "total": total,
            "tags": tags,
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    print!(
        "{}",
        crate::ui::views::tags::render_tags(
            &counts,
            total,
            &Selection::Unfiltered,
            ctx.ui.color,
            ctx.ui.unicode
        )
    );
    Ok(ExitCode::SUCCESS)
}
