//! Command handlers for the `folio` binary
//!
//! Each handler resolves CLI flags against `folio.toml`, runs a use case
//! and hands the result to a view. Flags win over config.

pub mod browse;
pub mod build;
pub mod check;
pub mod diff;
pub mod init;
pub mod list;
pub mod tags;
pub mod version;
pub mod watch;

use std::path::{Path, PathBuf};

use folio::config::{Config, ConfigWarning};
use folio::domain::services::AuditCheck;
use folio::domain::value_objects::{AnimationConfig, Selection, Tag, ThemeMode};
use folio::RenderOptions;

use crate::ui::context::UiContext;

/// Project cards never grow past this many columns
const MAX_CARD_WIDTH: usize = 80;

/// Everything a command needs besides its own flags
pub struct CommandContext {
    /// Directory relative paths resolve against
    pub root: PathBuf,
    pub config: Config,
    /// Unknown keys found while loading the config layers
    pub config_warnings: Vec<ConfigWarning>,
    pub ui: UiContext,
}

impl CommandContext {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn catalog_path(&self, flag: Option<PathBuf>) -> PathBuf {
        match flag {
            Some(path) => self.resolve(&path),
            None => self.config.catalog_path(&self.root),
        }
    }

    pub fn out_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        match flag {
            Some(path) => self.resolve(&path),
            None => self.config.out_dir(&self.root),
        }
    }

    pub fn render_options(
        &self,
        tag: Option<String>,
        theme: Option<ThemeMode>,
        no_animation: bool,
    ) -> RenderOptions {
        let mut options = RenderOptions::from_config(&self.config).with_selection(selection_from(tag));
        if let Some(theme) = theme {
            options.theme = theme;
        }
        if no_animation {
            options.animation = AnimationConfig::disabled();
        }
        options
    }

    /// Card width for `list` and `browse`: terminal width clamped to 20..=80
    pub fn card_width(&self) -> usize {
        usize::from(self.ui.caps.width).clamp(20, MAX_CARD_WIDTH)
    }

    /// Unknown config keys as `check` warnings, one per key
    pub fn config_checks(&self) -> Vec<AuditCheck> {
        self.config_warnings
            .iter()
            .map(|warning| {
                let recommendation = match &warning.suggestion {
                    Some(key) => format!("Did you mean `{}`?", key),
                    None => "Remove the key or fix its spelling".to_string(),
                };
                AuditCheck::warning(
                    display_path(self, &warning.file),
                    "unknown-key",
                    warning.message(),
                    recommendation,
                )
            })
            .collect()
    }

    /// Progress output goes to stdout unless quiet or JSON
    pub fn is_quiet(&self) -> bool {
        self.ui.is_quiet(&self.config)
    }
}

/// `--tag` value as a selection; blank means unfiltered
pub fn selection_from(tag: Option<String>) -> Selection {
    Selection::from(tag.filter(|t| !t.trim().is_empty()).map(Tag::new))
}

/// Path relative to the working directory when possible, for display
pub fn display_path(ctx: &CommandContext, path: &Path) -> String {
    path.strip_prefix(&ctx.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;

    fn ctx(config: Config) -> CommandContext {
        let caps = TerminalCapabilities {
            is_tty: false,
            is_interactive: false,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
            width: 80,
        };
        CommandContext {
            root: PathBuf::from("/site"),
            ui: UiContext::from_caps(false, 0, None, &config, caps),
            config,
            config_warnings: Vec::new(),
        }
    }

    #[test]
    fn flags_resolve_against_root() {
        let ctx = ctx(Config::default());
        assert_eq!(ctx.catalog_path(None), PathBuf::from("/site/catalog.toml"));
        assert_eq!(
            ctx.catalog_path(Some(PathBuf::from("data/team.yaml"))),
            PathBuf::from("/site/data/team.yaml")
        );
        assert_eq!(ctx.out_dir(Some(PathBuf::from("/tmp/out"))), PathBuf::from("/tmp/out"));
        assert_eq!(ctx.out_dir(None), PathBuf::from("/site/dist"));
    }

    #[test]
    fn blank_tag_is_unfiltered() {
        assert_eq!(selection_from(Some("  ".to_string())), Selection::Unfiltered);
        assert_eq!(selection_from(None), Selection::Unfiltered);
        assert_eq!(
            selection_from(Some("AI".to_string())),
            Selection::FilteredBy(Tag::new("AI"))
        );
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.theme.default_mode = ThemeMode::Light;
        let ctx = ctx(config);

        let options = ctx.render_options(None, Some(ThemeMode::Dark), true);
        assert_eq!(options.theme, ThemeMode::Dark);
        assert!(!options.animation.enabled);

        let options = ctx.render_options(None, None, false);
        assert_eq!(options.theme, ThemeMode::Light);
        assert!(options.animation.enabled);
    }

    #[test]
    fn card_width_follows_terminal_within_bounds() {
        let mut ctx = ctx(Config::default());
        assert_eq!(ctx.card_width(), 80);

        ctx.ui.caps.width = 300;
        assert_eq!(ctx.card_width(), 80);
        ctx.ui.caps.width = 52;
        assert_eq!(ctx.card_width(), 52);
        ctx.ui.caps.width = 8;
        assert_eq!(ctx.card_width(), 20);
    }

    #[test]
    fn config_warnings_become_check_warnings() {
        let mut ctx = ctx(Config::default());
        ctx.config_warnings.push(ConfigWarning {
            key: "biuld".to_string(),
            file: PathBuf::from("/site/folio.toml"),
            line: Some(1),
            suggestion: Some("build".to_string()),
        });

        let checks = ctx.config_checks();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].subject, "folio.toml");
        assert_eq!(checks[0].name, "unknown-key");
        assert_eq!(checks[0].message, "unknown key 'biuld' (line 1)");
        assert_eq!(checks[0].recommendation.as_deref(), Some("Did you mean `build`?"));
    }

    #[test]
    fn display_path_strips_root() {
        let ctx = ctx(Config::default());
        assert_eq!(display_path(&ctx, Path::new("/site/dist/index.html")), "dist/index.html");
        assert_eq!(display_path(&ctx, Path::new("/elsewhere/x")), "/elsewhere/x");
    }
}
