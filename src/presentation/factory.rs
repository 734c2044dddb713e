//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{BuildUseCase, DiffUseCase, WatchUseCase};
use crate::config::Config;
use crate::fs::LocalFs;

/// Type alias for the concrete BuildUseCase
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs>;

/// Type alias for the concrete DiffUseCase
pub type ConcreteDiffUseCase = DiffUseCase<LocalFs>;

/// Type alias for the concrete WatchUseCase
pub type ConcreteWatchUseCase = WatchUseCase<LocalFs>;

fn file_system(config: &Config) -> LocalFs {
    if config.build.atomic_writes {
        LocalFs::new()
    } else {
        LocalFs::non_atomic()
    }
}

/// Create a build use case honouring `build.atomic_writes`
pub fn create_build_use_case(config: &Config) -> ConcreteBuildUseCase {
    BuildUseCase::new(file_system(config))
}

pub fn create_diff_use_case() -> ConcreteDiffUseCase {
    DiffUseCase::new(LocalFs::new())
}

/// Create a watch use case rebuilding on changes to `watched`
pub fn create_watch_use_case(config: &Config, watched: Vec<PathBuf>) -> ConcreteWatchUseCase {
    WatchUseCase::new(file_system(config), watched)
}
