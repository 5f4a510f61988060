use std::path::PathBuf;

use fsearch::logging;
use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, LogSettings, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self, level_source: SettingSource) -> Result<LogSettings, ConfigError> {
		let level = match self.level {
			Some(value) => logging::parse_level(&value).ok_or_else(|| {
				ConfigError::invalid(
					"log.level",
					value.clone(),
					level_source,
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
			None => DEFAULT_LEVEL,
		};
		Ok(LogSettings {
			level,
			file: self.file,
		})
	}
}
