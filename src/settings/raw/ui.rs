use std::time::Duration;

use fsearch::{Theme, UiConfig, parse_color};
use ratatui::style::Color;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) prompt: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) selected_marker: Option<String>,
	pub(super) selected_color: Option<String>,
	pub(super) error_color: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(prompt) = cli.prompt.clone() {
			self.prompt = Some(prompt);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(UiConfig, Theme), ConfigError> {
		let defaults = UiConfig::default();
		let ui = UiConfig {
			prompt: self.prompt.unwrap_or(defaults.prompt),
			initial_query: self.initial_query.unwrap_or_default(),
			selected_marker: self.selected_marker.unwrap_or(defaults.selected_marker),
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
		};

		let fallback = Theme::default();
		let selected = resolve_color(
			"ui.selected_color",
			self.selected_color,
			fallback.selected.fg,
			sources,
		)?;
		let error = resolve_color("ui.error_color", self.error_color, fallback.error.fg, sources)?;

		Ok((ui, Theme::with_colors(selected, error)))
	}
}

fn resolve_color(
	key: &'static str,
	value: Option<String>,
	fallback: Option<Color>,
	sources: &ConfigSources,
) -> Result<Color, ConfigError> {
	match value {
		Some(value) => parse_color(&value).map_err(|err| {
			ConfigError::invalid(key, value.clone(), sources.source_for(key), err.to_string())
		}),
		None => Ok(fallback.unwrap_or(Color::Reset)),
	}
}
