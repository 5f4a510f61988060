//! Core crate exports for building and running the `fsearch` terminal interface.
//!
//! The root module re-exports the search pipeline and the UI builder so that
//! embedders can configure a session without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod launcher;
pub mod logging;
pub mod streams;
mod systems;
pub mod tui;
pub mod ui;

pub use launcher::{LaunchError, Launcher, SystemLauncher};
pub use systems::filesystem::{
	ScanEnvelope, ScanEvent, ScanOptions, ScanOutcome, ScanRequest, ScanStream, ScanTicket,
	ScansInFlight, scan, spawn_scan,
};
pub use systems::search::{
	ConfirmOutcome, LineStyle, MatchMode, PaneAction, PaneEnvelope, PaneStream, PaneTarget,
	ResultSet, ResultView, SessionController, SessionSnapshot, SessionState, SharedSession,
	StyledLine, compute_scroll_offset, matches, matches_ignore_case, render_lines,
	run_aggregator, spawn_aggregator, step_down, step_up,
};
pub use tui::{ResultPane, SearchInput, Theme, parse_color};
pub use ui::{App, SearchOutcome, SearchUi, UiConfig, run};
