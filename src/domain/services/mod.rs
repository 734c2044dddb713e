//! Domain Services
//!
//! Pure functions over catalog records. No I/O.

pub mod audit;
pub mod filter;

pub use audit::{audit_catalog, AuditCheck, AuditReport, CheckStatus};
pub use filter::{derive_tags, filtered_projects, tag_counts, FilterState};
