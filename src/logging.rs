//! Diagnostic logging setup
//!
//! The library only emits through the `log` facade. The binary calls
//! `init_logging` once, before config is read, then `set_verbosity` once
//! `output.verbosity` is known. `RUST_LOG` wins over both when set.

use log::LevelFilter;

/// Level for a `-v` count: warn, info, debug, trace
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` on stderr. Safe to call more than once.
///
/// The backend accepts every level; the `log` max level does the gating so
/// `set_verbosity` can raise it later.
pub fn init_logging(verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = env_logger::Builder::new();
    match &rust_log {
        Some(filters) => {
            builder.parse_filters(filters);
        }
        None => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).format_target(verbose >= 2);
    if builder.try_init().is_ok() && rust_log.is_none() {
        log::set_max_level(level_for(verbose));
    }
}

/// Change the active level after init; no-op under `RUST_LOG`
pub fn set_verbosity(verbose: u8) {
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(level_for(verbose));
    }
}
