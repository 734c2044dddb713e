//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (./folio.toml)
//! 4. User config (<config_dir>/folio/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig};
pub use types::{
    BuildConfig, ColorMode, Config, OutputConfig, ThemeConfig, Verbosity, CONFIG_FILE_NAME,
};
