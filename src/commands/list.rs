use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use folio::domain::services::filtered_projects;
use folio::render::EMPTY_STATE_MESSAGE;
use folio::load_catalog;

use super::{selection_from, CommandContext};
use crate::ui::views::list::ProjectListView;

pub fn cmd_list(ctx: &CommandContext, catalog: Option<PathBuf>, tag: Option<String>) -> Result<ExitCode> {
    let catalog = load_catalog(&ctx.catalog_path(catalog))?;
    let selection = selection_from(tag);
    let visible = filtered_projects(catalog.projects(), &selection);

    if ctx.ui.json {
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        let mut event = serde_json::json!({
            "event": "list",
            "filter": selection.label(),
            "total": catalog.projects().len(),
            "projects": titles,
        });
        if visible.is_empty() {
            event["message"] = serde_json::Value::from(EMPTY_STATE_MESSAGE);
        }
        crate::ui::json::emit(event)?;
        return Ok(ExitCode::SUCCESS);
    }

    let view = ProjectListView::new(&visible, &selection, catalog.projects().len())
        .width(ctx.card_width());
    print!("{}", view.render(ctx.ui.color, ctx.ui.unicode));
    Ok(ExitCode::SUCCESS)
}
