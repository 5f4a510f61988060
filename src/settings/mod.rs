//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] that is
//! used by the application. Config files, environment variables and CLI flags
//! are layered in that order.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{LogSettings, ResolvedConfig};
