//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AnimationConfig, ThemeMode};
use crate::error::FolioResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// File name of the project configuration
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Build configuration (`[build]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Catalog file, relative to the project root
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            out_dir: default_out_dir(),
            atomic_writes: true,
        }
    }
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalog.toml")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_true() -> bool {
    true
}

/// Theme configuration (`[theme]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub default_mode: ThemeMode,
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count
    pub fn as_level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Defaults, then user config, then project `folio.toml`, then `FOLIO_*`
    pub fn load_layered(project_root: Option<&Path>) -> FolioResult<LoadedConfig> {
        loader::load_layered(project_root)
    }

    /// Catalog path resolved against `project_root`
    pub fn catalog_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build.catalog)
    }

    /// Output directory resolved against `project_root`
    pub fn out_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build.out_dir)
    }
}
