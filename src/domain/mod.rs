//! Domain Layer
//!
//! The catalog model and the filter engine. Nothing here touches the file
//! system; loading lives in `parser`, writing in `fs`.
//!
//! ## Structure
//!
//! - `entities/` - Catalog records (Contributor, Project, Site, Catalog)
//! - `value_objects/` - Immutable value types (Tag, Selection, ExternalLink, ...)
//! - `services/` - Pure functions over the catalog (filtering, audit)

pub mod entities;
pub mod services;
pub mod value_objects;
