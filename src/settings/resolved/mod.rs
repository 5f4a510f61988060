use std::path::PathBuf;

use fsearch::{ScanOptions, Theme, UiConfig};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	pub level: LevelFilter,
	/// Explicit log file; `None` means the default file in the cache directory.
	pub file: Option<PathBuf>,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub root: PathBuf,
	pub scan: ScanOptions,
	pub ui: UiConfig,
	pub theme: Theme,
	pub log: LogSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
