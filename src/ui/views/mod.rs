pub mod build;
pub mod check;
pub mod diff;
pub mod list;
pub mod tags;
pub mod version;
pub mod watch;
