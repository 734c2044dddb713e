//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap definitions shared by the binary and its tests
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use folio::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&config);
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use factory::{create_build_use_case, create_diff_use_case, create_watch_use_case};
