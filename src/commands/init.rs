//! Init command - write a starter catalog and folio.toml

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use folio::config::CONFIG_FILE_NAME;
use folio::fs::{FileSystem, LocalFs};

use super::CommandContext;
use crate::ui::primitives::icon::Icon;

const CATALOG_TEMPLATE: &str = include_str!("../templates/catalog.toml");
const CONFIG_TEMPLATE: &str = include_str!("../templates/folio.toml");

/// Default catalog name written by `init`
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

pub fn cmd_init(ctx: &CommandContext, path: &Path, force: bool) -> Result<ExitCode> {
    let dir = if path.is_absolute() {
        path.to_path_buf()
    } else {
        ctx.root.join(path)
    };
    let written = write_templates(&LocalFs::new(), &dir, force)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "init",
            "written": written,
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    for file in &written {
        println!(
            "{} Created {}",
            Icon::Success.colored(ctx.ui.color, ctx.ui.unicode),
            file.display()
        );
    }
    println!(
        "{} Next: folio build",
        Icon::Arrow.colored(ctx.ui.color, ctx.ui.unicode)
    );
    Ok(ExitCode::SUCCESS)
}

/// Write both templates into `dir`; refuses to overwrite unless `force`
fn write_templates(fs: &impl FileSystem, dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let files = [
        (dir.join(CATALOG_FILE_NAME), CATALOG_TEMPLATE),
        (dir.join(CONFIG_FILE_NAME), CONFIG_TEMPLATE),
    ];

    if !force {
        let existing: Vec<String> = files
            .iter()
            .filter(|(path, _)| fs.exists(path))
            .map(|(path, _)| path.display().to_string())
            .collect();
        if !existing.is_empty() {
            bail!(
                "{} already exists; use --force to overwrite",
                existing.join(" and ")
            );
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        fs.write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
