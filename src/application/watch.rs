//! Watch Use Case
//!
//! Rebuilds the page whenever the catalog or config file changes:
//! - Debouncing (100ms)
//! - Graceful Ctrl+C shutdown through a shared `AtomicBool`
//! - Events serializable as NDJSON for CI
//!
//! A failed rebuild is reported as an event; watching continues so the
//! next save can fix it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;

use super::build::{BuildOptions, BuildUseCase, WriteStatus};
use crate::error::{FolioError, FolioResult};
use crate::fs::FileSystem;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

const POLL_MS: u64 = 50;

/// Event emitted during watch operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    Started { paths: Vec<PathBuf> },
    FileChanged { path: PathBuf },
    BuildStarted,
    BuildComplete {
        path: PathBuf,
        status: WriteStatus,
        projects: usize,
    },
    Error { message: String },
    Shutdown,
}

impl WatchEvent {
    /// One NDJSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"event":"error"}"#.to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_change(&mut self, path: PathBuf) {
        self.add_change_at(path, Instant::now());
    }

    fn add_change_at(&mut self, path: PathBuf, at: Instant) {
        self.pending_changes.insert(path);
        self.last_change = Some(at);
    }

    pub fn should_sync(&self) -> bool {
        self.should_sync_at(Instant::now())
    }

    fn should_sync_at(&self, now: Instant) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty()
                    && now.saturating_duration_since(last) >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }
}

/// Watch Use Case
pub struct WatchUseCase<FS>
where
    FS: FileSystem,
{
    build: BuildUseCase<FS>,
    /// Files whose modification triggers a rebuild
    watched: Vec<PathBuf>,
}

impl<FS> WatchUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, watched: Vec<PathBuf>) -> Self {
        Self {
            build: BuildUseCase::new(file_system),
            watched,
        }
    }

    fn is_watched(&self, path: &Path) -> bool {
        self.watched.iter().any(|w| {
            w == path || w.file_name().is_some_and(|name| Some(name) == path.file_name())
        })
    }

    /// Run one rebuild and report it
    ///
    /// `options` is called per rebuild so config edits take effect.
    pub fn rebuild(
        &self,
        options: &impl Fn() -> FolioResult<BuildOptions>,
        on_event: &impl Fn(WatchEvent),
    ) {
        on_event(WatchEvent::BuildStarted);
        let outcome = options().and_then(|opts| self.build.execute(&opts));
        match outcome {
            Ok(result) => on_event(WatchEvent::BuildComplete {
                path: result.path,
                status: result.status,
                projects: result.projects,
            }),
            Err(e) => {
                warn!("rebuild failed: {}", e);
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is set to false.
    pub fn start(
        &self,
        running: Arc<AtomicBool>,
        options: impl Fn() -> FolioResult<BuildOptions>,
        on_event: impl Fn(WatchEvent),
    ) -> FolioResult<()> {
        on_event(WatchEvent::Started {
            paths: self.watched.clone(),
        });
        self.rebuild(&options, &on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            NotifyConfig::default(),
        )
        .map_err(|e| FolioError::Watch(e.to_string()))?;

        // Editors often replace files on save, so watch the parent directories.
        let mut dirs: Vec<PathBuf> = self
            .watched
            .iter()
            .map(|p| match p.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            })
            .collect();
        dirs.sort();
        dirs.dedup();
        for dir in &dirs {
            debug!("watching {}", dir.display());
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .map_err(|e| FolioError::Watch(format!("{}: {}", dir.display(), e)))?;
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(POLL_MS)) {
                if self.is_watched(&path) {
                    on_event(WatchEvent::FileChanged { path: path.clone() });
                    state.add_change(path);
                }
            }

            if state.should_sync() {
                state.take_changes();
                self.rebuild(&options, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
