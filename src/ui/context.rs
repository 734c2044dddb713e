use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use folio::config::{ColorMode, Config};
use folio::presentation::cli::ColorWhen;

/// Output decisions for one CLI invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose: verbose.max(config.output.verbosity.as_level()),
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Progress lines are suppressed in JSON mode and at `quiet`
    pub fn is_quiet(&self, config: &Config) -> bool {
        self.json || config.output.verbosity == folio::config::Verbosity::Quiet
    }
}
