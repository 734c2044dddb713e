//! Terminal presentation for the `folio` binary
//!
//! Views return `String`s so they can be tested without a terminal; the
//! commands decide where the text goes.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
