//! Interactive filter picker
//!
//! The terminal counterpart of the page's filter bar: pick "All" or a tag,
//! see the matching cards, pick again. Uses the same `FilterState` and
//! `filtered_projects` the renderer does.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use dialoguer::Select;

use folio::domain::services::tag_counts;
use folio::domain::value_objects::{Selection, Tag};
use folio::{load_catalog, FilterState};

use super::CommandContext;
use crate::ui::theme::FolioTheme;
use crate::ui::views::list::ProjectListView;

const QUIT_LABEL: &str = "Quit";

pub fn cmd_browse(ctx: &CommandContext, catalog: Option<PathBuf>) -> Result<ExitCode> {
    if ctx.ui.json || !ctx.ui.caps.is_interactive {
        bail!("browse needs an interactive terminal; use `folio list --tag <tag>` instead");
    }

    let catalog = load_catalog(&ctx.catalog_path(catalog))?;
    let counts = tag_counts(catalog.projects());
    let tags: Vec<Tag> = counts.iter().map(|(tag, _)| tag.clone()).collect();
    let theme = FolioTheme::new(ctx.ui.unicode);
    let mut state = FilterState::new();

    loop {
        let items = picker_items(&theme, &counts, catalog.projects().len(), &state);
        let choice = Select::with_theme(&theme)
            .with_prompt("Filter projects")
            .items(&items)
            .default(active_index(&tags, state.selection()))
            .interact_opt()?;

        let Some(selection) = choice.and_then(|index| selection_at(&tags, index)) else {
            break;
        };
        state.set_filter(selection);

        let visible = state.visible(catalog.projects());
        let view = ProjectListView::new(&visible, state.selection(), catalog.projects().len())
            .width(ctx.card_width());
        println!();
        print!("{}", view.render(ctx.ui.color, ctx.ui.unicode));
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

/// "All", each tag in derived order, then "Quit"
fn picker_items(
    theme: &FolioTheme,
    counts: &[(Tag, usize)],
    total: usize,
    state: &FilterState,
) -> Vec<String> {
    let mut items = Vec::with_capacity(counts.len() + 2);
    let all = Selection::Unfiltered;
    items.push(theme.item_label(
        &format!("{} ({})", all.label(), total),
        state.is_active(&all),
    ));
    for (tag, count) in counts {
        let selection = Selection::FilteredBy(tag.clone());
        items.push(theme.item_label(
            &format!("{} ({})", tag, count),
            state.is_active(&selection),
        ));
    }
    items.push(format!("  {}", QUIT_LABEL));
    items
}

/// Selection for a picker index; `None` for "Quit"
fn selection_at(tags: &[Tag], index: usize) -> Option<Selection> {
    match index {
        0 => Some(Selection::Unfiltered),
        i => tags.get(i - 1).cloned().map(Selection::FilteredBy),
    }
}

fn active_index(tags: &[Tag], selection: &Selection) -> usize {
    selection
        .tag()
        .and_then(|active| tags.iter().position(|t| t == active))
        .map(|pos| pos + 1)
        .unwrap_or(0)
}
