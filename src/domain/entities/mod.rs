//! Domain Entities
//!
//! Catalog records. Contributors and projects are read-only once a
//! `Catalog` has been built.
//! - `Contributor` - a person credited on the page
//! - `Project` - a card in the filterable grid (identity: `title`)
//! - `Site` - page chrome (brand, hero copy, footer)
//! - `Catalog` - the validated collection of all of the above

mod catalog;
mod contributor;
mod project;
mod site;

pub use catalog::Catalog;
pub use contributor::{Contributor, LEAD_ROLE};
pub use project::Project;
pub use site::Site;
