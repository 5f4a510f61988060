//! Query lifecycle: matching, aggregation, selection and opening results.

mod aggregator;
mod controller;
mod matcher;
mod navigator;
mod results;
mod session;
mod view;

pub use aggregator::{run_aggregator, spawn_aggregator};
pub use controller::{ConfirmOutcome, SessionController};
pub use matcher::{MatchMode, matches, matches_ignore_case};
pub use navigator::{compute_scroll_offset, step_down, step_up};
pub use results::ResultSet;
pub use session::{SessionSnapshot, SessionState, SharedSession};
pub use view::{
	LineStyle, PaneAction, PaneEnvelope, PaneStream, PaneTarget, ResultView, StyledLine,
	render_lines,
};
