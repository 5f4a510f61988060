//! Interactive terminal UI orchestration.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, key handling, drawing and
//! the state the application keeps between frames.

mod actions;
mod builder;
mod config;
mod render;
mod runtime;
mod state;
#[cfg(test)]
mod tests;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use runtime::run;
pub use state::{App, SearchOutcome};
