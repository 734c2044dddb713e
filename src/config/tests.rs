//! Tests for the config module

use super::loader::{apply_env_overrides, load_layers};
use super::types::*;
use crate::domain::value_objects::ThemeMode;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.build.catalog, PathBuf::from("catalog.toml"));
    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    assert!(config.build.atomic_writes);
    assert_eq!(config.theme.default_mode, ThemeMode::System);
    assert!(config.animation.enabled);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[build]
catalog = "data/portfolio.yaml"
out_dir = "public"

[theme]
default_mode = "dark"

[animation]
stagger_delay = 0.05

[output]
verbosity = "verbose"
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.build.catalog, PathBuf::from("data/portfolio.yaml"));
    assert_eq!(config.build.out_dir, PathBuf::from("public"));
    assert_eq!(config.theme.default_mode, ThemeMode::Dark);
    assert_eq!(config.animation.stagger_delay, 0.05);
    assert_eq!(config.animation.child_delay, 0.3);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_empty_config_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_paths_resolve_against_project_root() {
    let config = Config::default();
    let root = Path::new("/srv/site");
    assert_eq!(config.catalog_path(root), PathBuf::from("/srv/site/catalog.toml"));
    assert_eq!(config.out_dir(root), PathBuf::from("/srv/site/dist"));
}

#[test]
fn test_unknown_key_warning_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[build]\nout_dri = \"public\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "out_dri");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("out_dir"));
}

#[test]
fn test_invalid_config_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[theme]\ndefault_mode = \"sepia\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, crate::error::FolioError::InvalidConfig { .. }));
}

#[test]
fn test_load_negative_animation_values_are_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[animation]\nchild_delay = -2.0\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.animation.child_delay, 0.0);
}

#[test]
fn test_project_layer_overrides_user_layer_per_key() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    let project = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &user,
        "[build]\nout_dir = \"public\"\n\n[output]\ncolor = \"never\"\n",
    )
    .unwrap();
    fs::write(&project, "[theme]\ndefault_mode = \"dark\"\n\n[build]\ncatalog = \"data.yaml\"\n").unwrap();

    let loaded = load_layers(&[Some(user.as_path()), Some(project.as_path())], env(&[])).unwrap();

    assert_eq!(loaded.config.theme.default_mode, ThemeMode::Dark);
    assert_eq!(loaded.config.output.color, ColorMode::Never);
    assert_eq!(loaded.config.build.out_dir, PathBuf::from("public"));
    assert_eq!(loaded.config.build.catalog, PathBuf::from("data.yaml"));
    assert_eq!(loaded.sources, vec![user, project]);
}

#[test]
fn test_env_overrides_beat_file_layers() {
    let dir = tempdir().unwrap();
    let project = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&project, "[build]\nout_dir = \"site\"\n").unwrap();

    let loaded = load_layers(&[Some(project.as_path())], env(&[("FOLIO_OUT_DIR", "public")])).unwrap();
    assert_eq!(loaded.config.build.out_dir, PathBuf::from("public"));
}

#[test]
fn test_missing_layers_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join(CONFIG_FILE_NAME);

    let loaded = load_layers(&[None, Some(absent.as_path())], env(&[])).unwrap();
    assert_eq!(loaded.config, Config::default());
    assert!(loaded.sources.is_empty());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_layered_load_collects_unknown_keys_per_file() {
    let dir = tempdir().unwrap();
    let project = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&project, "[biuld]\nout_dir = \"public\"\n").unwrap();

    let loaded = load_layers(&[Some(project.as_path())], env(&[])).unwrap();

    assert_eq!(loaded.config.build.out_dir, PathBuf::from("dist"));
    assert_eq!(loaded.warnings.len(), 1);
    let warning = &loaded.warnings[0];
    assert_eq!(warning.key, "biuld");
    assert_eq!(warning.file, project);
    assert_eq!(warning.line, Some(1));
    assert_eq!(warning.suggestion.as_deref(), Some("build"));
    assert_eq!(warning.message(), "unknown key 'biuld' (line 1)");
}

#[test]
fn test_malformed_layer_is_an_error() {
    let dir = tempdir().unwrap();
    let project = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&project, "[build\nout_dir = ").unwrap();

    let err = load_layers(&[Some(project.as_path())], env(&[])).unwrap_err();
    match err {
        crate::error::FolioError::InvalidConfig { file, .. } => assert_eq!(file, project),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_env_overrides() {
    let config = apply_env_overrides(
        Config::default(),
        env(&[
            ("FOLIO_CATALOG", "other.yaml"),
            ("FOLIO_OUT_DIR", "public"),
            ("FOLIO_THEME", "light"),
            ("FOLIO_ANIMATIONS", "false"),
            ("FOLIO_VERBOSITY", "debug"),
        ]),
    );

    assert_eq!(config.build.catalog, PathBuf::from("other.yaml"));
    assert_eq!(config.build.out_dir, PathBuf::from("public"));
    assert_eq!(config.theme.default_mode, ThemeMode::Light);
    assert!(!config.animation.enabled);
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_env_overrides_ignore_bad_values() {
    let config = apply_env_overrides(
        Config::default(),
        env(&[("FOLIO_THEME", "sepia"), ("FOLIO_CATALOG", "")]),
    );
    assert_eq!(config.theme.default_mode, ThemeMode::System);
    assert_eq!(config.build.catalog, PathBuf::from("catalog.toml"));
}

#[test]
fn test_animations_env_accepts_truthy_values() {
    let mut base = Config::default();
    base.animation.enabled = false;
    let config = apply_env_overrides(base, env(&[("FOLIO_ANIMATIONS", "1")]));
    assert!(config.animation.enabled);
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(Verbosity::Quiet.as_level(), 0);
    assert_eq!(Verbosity::Verbose.as_level(), 1);
    assert_eq!(Verbosity::Debug.as_level(), 2);
}
