//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between the file system, the parser and the renderer
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - load, render, write `index.html` when it changed
//! - `DiffUseCase` - compare the rendered page with the one on disk
//! - `CheckUseCase` - validate and audit a catalog
//! - `WatchUseCase` - rebuild on catalog/config changes

pub mod build;
pub mod check;
pub mod diff;
pub mod watch;

pub use build::{BuildOptions, BuildResult, BuildUseCase, WriteStatus, INDEX_FILE};
pub use check::{CheckOptions, CheckResult, CheckUseCase};
pub use diff::{DiffResult, DiffUseCase};
pub use watch::{WatchEvent, WatchUseCase, WatcherState, DEBOUNCE_MS};
