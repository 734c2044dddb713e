//! Shared helpers for `folio` CLI tests.
//!
//! `TestEnv` gives every test its own project directory and config home,
//! and runs the binary with color off and an ASCII locale so output is
//! stable across machines.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// The 2023 exhibition catalog shipped as the `init` template
pub const SAMPLE_CATALOG: &str = include_str!("../../src/templates/catalog.toml");

pub const SAMPLE_CATALOG_YAML: &str = r#"
site:
  title: Team Folio
  heading: Team Folio
contributors:
  - name: Lead
    github: lead
    tags: [Lead Developer]
projects:
  - title: Quiz App
    description: Quizzes.
    github: https://github.com/o/quiz
    tags: [Quiz]
  - title: Chat App
    description: Chat.
    github: https://github.com/o/chat
    demo: https://chat.example
    tags: [Chat, Quiz]
"#;

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON value
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON {:?}: {}", l, e)))
            .collect()
    }
}

pub struct TestEnv {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Environment with the sample catalog at `catalog.toml`
    pub fn with_sample_catalog() -> Self {
        let env = Self::new();
        env.write("catalog.toml", SAMPLE_CATALOG);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("VISUAL")
            .env_remove("EDITOR");
        for key in [
            "FOLIO_CATALOG",
            "FOLIO_OUT_DIR",
            "FOLIO_THEME",
            "FOLIO_ANIMATIONS",
            "FOLIO_VERBOSITY",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command(args).output().expect("failed to run folio");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn exists(&self, relative: &str) -> bool {
        Path::new(&self.path(relative)).exists()
    }
}
