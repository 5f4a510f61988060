use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::env_var_for;
use crate::cli::CliArgs;

mod logging;
mod scan;
mod ui;

use logging::LogSection;
use scan::ScanSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	scan: ScanSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.scan.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let mut sources = ConfigSources::default();
		sources.record(
			"scan.threads",
			detect_source(cli.threads.is_some(), self.scan.threads.is_some(), "--threads", "scan.threads"),
		);
		sources.record(
			"scan.max_depth",
			detect_source(
				cli.max_depth.is_some(),
				self.scan.max_depth.is_some(),
				"--max-depth",
				"scan.max_depth",
			),
		);
		sources.record(
			"ui.debounce_ms",
			detect_source(
				cli.debounce_ms.is_some(),
				self.ui.debounce_ms.is_some(),
				"--debounce-ms",
				"ui.debounce_ms",
			),
		);
		for key in ["ui.selected_color", "ui.error_color"] {
			sources.record(key, detect_source(false, true, "", key));
		}
		sources.record(
			"log.level",
			detect_source(cli.log_level.is_some(), self.log.level.is_some(), "--log-level", "log.level"),
		);

		let (root, scan) = self.scan.resolve()?;
		let (ui, theme) = self.ui.resolve(&sources).map_err(Error::new)?;
		let log = self
			.log
			.resolve(sources.source_for("log.level"))
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			root,
			scan,
			ui,
			theme,
			log,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
