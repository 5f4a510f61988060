use std::path::PathBuf;

use anyhow::Result;

use super::config::UiConfig;
use super::state::{App, SearchOutcome};
use crate::launcher::{Launcher, SystemLauncher};
use crate::systems::filesystem::ScanOptions;
use crate::tui::Theme;

/// A small builder for configuring and running the interactive search.
pub struct SearchUi {
	root: PathBuf,
	options: ScanOptions,
	ui: UiConfig,
	theme: Theme,
	launcher: Box<dyn Launcher>,
}

impl SearchUi {
	/// Search below `root` with default options and the system launcher.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			options: ScanOptions::default(),
			ui: UiConfig::default(),
			theme: Theme::default(),
			launcher: Box::new(SystemLauncher),
		}
	}

	pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn with_launcher(mut self, launcher: Box<dyn Launcher>) -> Self {
		self.launcher = launcher;
		self
	}

	/// Build the [`App`] without taking over the terminal.
	pub fn build<'a>(self) -> App<'a> {
		App::new(self.root, self.options, self.ui, self.theme, self.launcher)
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}
