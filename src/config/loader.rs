//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::domain::value_objects::ThemeMode;
use crate::error::{FolioError, FolioResult};

use super::types::{Config, Verbosity, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// "unknown key 'biuld' (line 1)"
    pub fn message(&self) -> String {
        match self.line {
            Some(line) => format!("unknown key '{}' (line {})", self.key, line),
            None => format!("unknown key '{}'", self.key),
        }
    }
}

/// Merged configuration plus what each layer reported
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    Ok((config.normalized(), warnings))
}

fn parse_with_warnings(content: &str, path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid_config(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn invalid_config(path: &Path, error: impl std::fmt::Display) -> FolioError {
    FolioError::InvalidConfig {
        file: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Merge user config, then project `folio.toml`, then `FOLIO_*` variables
///
/// Later layers override earlier ones key by key. A layer that exists but
/// does not parse is an error, never silently skipped.
pub fn load_layered(project_root: Option<&Path>) -> FolioResult<LoadedConfig> {
    let user = user_config_path();
    let project = project_root.map(|root| root.join(CONFIG_FILE_NAME));
    load_layers(
        &[user.as_deref(), project.as_deref()],
        |key| std::env::var(key).ok(),
    )
}

pub(crate) fn load_layers(
    layers: &[Option<&Path>],
    get_env: impl Fn(&str) -> Option<String>,
) -> FolioResult<LoadedConfig> {
    let mut merged = toml::Table::new();
    let mut loaded = LoadedConfig::default();

    for path in layers.iter().flatten() {
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(path)?;
        let (_, warnings) = parse_with_warnings(&content, path)?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| invalid_config(path, e))?;
        debug!("config layer {}", path.display());
        merge_tables(&mut merged, table);
        loaded.warnings.extend(warnings);
        loaded.sources.push(path.to_path_buf());
    }

    if loaded.sources.is_empty() {
        debug!("no config file found, using defaults");
    }

    let config: Config = toml::Value::Table(merged).try_into().map_err(|e| {
        let file = loaded.sources.last().cloned().unwrap_or_default();
        invalid_config(&file, e)
    })?;
    loaded.config = apply_env_overrides(config.normalized(), get_env);
    Ok(loaded)
}

/// Overlay `upper` onto `base`; nested tables merge, other values replace
fn merge_tables(base: &mut toml::Table, upper: toml::Table) {
    for (key, value) in upper {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(catalog) = get_env("FOLIO_CATALOG").filter(|v| !v.is_empty()) {
        config.build.catalog = PathBuf::from(catalog);
    }

    if let Some(out_dir) = get_env("FOLIO_OUT_DIR").filter(|v| !v.is_empty()) {
        config.build.out_dir = PathBuf::from(out_dir);
    }

    if let Some(theme) = get_env("FOLIO_THEME") {
        match theme.parse::<ThemeMode>() {
            Ok(mode) => config.theme.default_mode = mode,
            Err(e) => warn!("FOLIO_THEME: {}", e),
        }
    }

    if let Some(val) = get_env("FOLIO_ANIMATIONS") {
        config.animation.enabled = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(verbosity) = get_env("FOLIO_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// `<config_dir>/folio/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "catalog",
        "out_dir",
        "atomic_writes",
        "theme",
        "default_mode",
        "animation",
        "enabled",
        "stagger_delay",
        "child_delay",
        "item_offset_px",
        "spring_stiffness",
        "hero_duration",
        "hero_delay",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

impl Config {
    fn normalized(mut self) -> Self {
        self.animation = self.animation.normalized();
        self
    }
}
