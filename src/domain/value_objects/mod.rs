//! Domain Value Objects
//!
//! Immutable value types shared by the catalog, the filter engine and the
//! renderer.

mod animation;
mod hash;
mod link;
mod selection;
mod tag;
mod theme_mode;

pub use animation::{css_seconds, AnimationConfig};
pub use hash::ContentHash;
pub use link::{is_absolute_http_url, ExternalLink, LinkKind};
pub use selection::Selection;
pub use tag::Tag;
pub use theme_mode::ThemeMode;
