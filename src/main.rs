//! Folio CLI - portfolio catalog compiler
//!
//! Usage: folio [COMMAND]
//!
//! Commands:
//!   build   Compile the catalog into index.html
//!   diff    Preview changes to index.html without writing
//!   check   Validate and audit the catalog
//!   list    List projects, optionally filtered by tag
//!   tags    List filter tags with project counts
//!   browse  Pick filters interactively (default)
//!   watch   Rebuild on catalog or config changes
//!   init    Write a starter catalog and folio.toml

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use folio::config::Config;
use folio::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

use commands::CommandContext;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    folio::logging::init_logging(cli.verbose);

    let root = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let loaded = match Config::load_layered(Some(&root)) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
            report_failure(&anyhow::Error::new(err), &ui);
            return ExitCode::FAILURE;
        }
    };
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    folio::logging::set_verbosity(ui.verbose);

    let ctx = CommandContext {
        root,
        config: loaded.config,
        config_warnings: loaded.warnings,
        ui,
    };
    match run(cli.command, &ctx) {
        Ok(code) => code,
        Err(err) => {
            report_failure(&err, &ctx.ui);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: &anyhow::Error, ui: &UiContext) {
    ui::error::print_error(err, ui.json, ui.color, ui.unicode);
    ui::error::offer_open_in_editor(err, ui.json);
}

fn run(command: Option<Commands>, ctx: &CommandContext) -> Result<ExitCode> {
    match command {
        Some(Commands::Build {
            catalog,
            out,
            tag,
            theme,
            no_animation,
            dry_run,
        }) => commands::build::cmd_build(ctx, catalog, out, tag, theme, no_animation, dry_run),
        Some(Commands::Diff { catalog, out, tag }) => {
            commands::diff::cmd_diff(ctx, catalog, out, tag)
        }
        Some(Commands::Check {
            catalog,
            strict_warnings,
        }) => commands::check::cmd_check(ctx, catalog, strict_warnings),
        Some(Commands::List { catalog, tag }) => commands::list::cmd_list(ctx, catalog, tag),
        Some(Commands::Tags { catalog }) => commands::tags::cmd_tags(ctx, catalog),
        Some(Commands::Browse { catalog }) => commands::browse::cmd_browse(ctx, catalog),
        Some(Commands::Watch { catalog, out }) => commands::watch::cmd_watch(ctx, catalog, out),
        Some(Commands::Init { path, force }) => commands::init::cmd_init(ctx, &path, force),
        Some(Commands::Version) => commands::version::cmd_version(ctx),
        None => commands::browse::cmd_browse(ctx, None),
    }
}
