use std::time::Duration;

use crate::tui::DEFAULT_SELECTED_MARKER;

/// Text and timing used by the interactive UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Label drawn before the query editor. Empty hides it.
	pub prompt: String,
	/// Query typed into the editor at startup.
	pub initial_query: String,
	/// Appended to the highlighted result.
	pub selected_marker: String,
	/// Quiet period after an edit before the scan starts. Zero scans immediately.
	pub debounce: Duration,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			prompt: "Search".to_string(),
			initial_query: String::new(),
			selected_marker: DEFAULT_SELECTED_MARKER.to_string(),
			debounce: Duration::ZERO,
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}
}
