use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use folio::application::WatchEvent;
use folio::config::{Config, CONFIG_FILE_NAME};
use folio::presentation::create_watch_use_case;
use folio::{BuildOptions, FolioResult, RenderOptions};

use super::{display_path, CommandContext};
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(
    ctx: &CommandContext,
    catalog: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<ExitCode> {
    let catalog = ctx.catalog_path(catalog);
    let out_dir = ctx.out_dir(out);
    let config_path = ctx.root.join(CONFIG_FILE_NAME);
    let watched = vec![catalog.clone(), config_path];
    let ui = ctx.ui;

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let shown: Vec<PathBuf> = watched
            .iter()
            .map(|p| PathBuf::from(display_path(ctx, p)))
            .collect();
        print!(
            "{}",
            render_watch_header(&shown, &display_path(ctx, &out_dir), ui.color, ui.unicode)
        );
        println!();
    }

    // Re-read the config layers per rebuild so theme and animation edits apply.
    let options = || -> FolioResult<BuildOptions> {
        let config = Config::load_layered(Some(&ctx.root))?.config;
        Ok(BuildOptions::new(&catalog, &out_dir).with_render(RenderOptions::from_config(&config)))
    };

    let on_event = |event: WatchEvent| {
        if ui.json {
            println!("{}", event.to_json());
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            print!(
                "{}",
                render_watch_event(&timestamp, &event, ui.color, ui.unicode)
            );
        }
    };

    create_watch_use_case(&ctx.config, watched.clone()).start(running, options, on_event)?;
    Ok(ExitCode::SUCCESS)
}
