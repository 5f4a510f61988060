use std::path::PathBuf;
use std::time::Instant;

use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use crate::launcher::Launcher;
use crate::systems::filesystem::ScanOptions;
use crate::systems::search::SessionController;
use crate::tui::{ResultPane, SearchInput, Theme};

/// What the user did during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
	/// Query in the editor when the UI exited.
	pub query: String,
	/// Every file handed to the launcher, in order.
	pub opened: Vec<PathBuf>,
}

/// A scan waiting for the debounce period to pass.
#[derive(Debug, Clone)]
pub(crate) struct PendingLaunch {
	pub query: String,
	pub generation: u64,
	pub due: Instant,
}

pub struct App<'a> {
	pub(crate) search_input: SearchInput<'a>,
	pub(crate) pane: ResultPane,
	pub(crate) controller: SessionController,
	pub(crate) launcher: Box<dyn Launcher>,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) pending_launch: Option<PendingLaunch>,
	pub(crate) opened: Vec<PathBuf>,
}

impl<'a> App<'a> {
	/// Build the app and start the search session rooted at `root`.
	///
	/// A non-empty initial query is scanned straight away.
	pub fn new(
		root: PathBuf,
		options: ScanOptions,
		ui: UiConfig,
		theme: Theme,
		launcher: Box<dyn Launcher>,
	) -> Self {
		let mut search_input = SearchInput::new(ui.initial_query.clone());
		search_input.set_style(theme.input);
		let mut app = Self {
			search_input,
			pane: ResultPane::new(ui.selected_marker.clone()),
			controller: SessionController::start(root, options),
			launcher,
			ui,
			theme,
			throbber_state: ThrobberState::default(),
			pending_launch: None,
			opened: Vec::new(),
		};
		if !app.ui.initial_query.is_empty() {
			let query = app.ui.initial_query.clone();
			app.controller.on_query_changed(&query, &mut app.pane);
		}
		app
	}

	/// React to an edited query: reset now, scan now or after the debounce.
	pub(crate) fn query_changed(&mut self) {
		let query = self.search_input.text();
		if self.ui.debounce.is_zero() {
			self.pending_launch = None;
			self.controller.on_query_changed(&query, &mut self.pane);
			return;
		}

		let generation = self.controller.begin_query(&mut self.pane);
		log::trace!("deferring scan {generation} by {:?}", self.ui.debounce);
		self.pending_launch = Some(PendingLaunch {
			query,
			generation,
			due: Instant::now() + self.ui.debounce,
		});
	}

	/// Launch the debounced scan once its quiet period has elapsed.
	pub(crate) fn launch_due_scan(&mut self, now: Instant) {
		let due = self
			.pending_launch
			.as_ref()
			.is_some_and(|pending| pending.due <= now);
		if !due {
			return;
		}
		if let Some(pending) = self.pending_launch.take() {
			self.controller
				.launch_scan(&pending.query, pending.generation);
		}
	}

	/// Apply queued result updates to the pane.
	pub(crate) fn pump_results(&mut self) -> usize {
		self.controller.pump(&mut self.pane)
	}

	pub(crate) fn status_label(&self) -> String {
		match self.controller.result_count() {
			1 => "1 match".to_string(),
			count => format!("{count} matches"),
		}
	}

	pub(crate) fn into_outcome(self) -> SearchOutcome {
		SearchOutcome {
			query: self.search_input.text(),
			opened: self.opened,
		}
	}
}
