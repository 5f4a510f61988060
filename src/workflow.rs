use anyhow::Result;
use fsearch::{SearchOutcome, SearchUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			root,
			scan,
			ui,
			theme,
			log: _,
		} = config;

		let search_ui = SearchUi::new(root)
			.with_scan_options(scan)
			.with_ui_config(ui)
			.with_theme(theme);
		Self { search_ui }
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search_ui.run()
	}
}
