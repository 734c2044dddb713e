//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Path flags left unset fall back to `folio.toml`, then the built-in defaults

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::ThemeMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Folio - compile a portfolio catalog into a single static page
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'folio' without arguments to browse the catalog interactively.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the catalog into <out>/index.html
    Build {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Filter selected when the page loads
        #[arg(short, long)]
        tag: Option<String>,

        /// Initial colour scheme (system, light, dark)
        #[arg(long)]
        theme: Option<ThemeMode>,

        /// Render a static page without entry animations
        #[arg(long)]
        no_animation: bool,

        /// Dry run - render and compare, write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview changes to index.html without writing
    Diff {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Filter selected when the page loads
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Validate the catalog and report presentation fallbacks
    Check {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// List projects, optionally filtered by tag
    List {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Only projects carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show the derived tag set with project counts
    Tags {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Pick filters interactively and preview the visible projects
    Browse {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Watch the catalog and config and rebuild on change
    Watch {
        /// Catalog file (.toml, .yaml or .yml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write a starter folio.toml and catalog.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show version information
    Version,
}
