//! File-backed logging.
//!
//! The terminal is owned by the TUI, so records go to a log file instead of
//! stderr. Everything else in the crate only talks to the `log` facade.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "fsearch.log";

/// Default location of the log file inside the cache directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Parse a textual level such as `debug` or `OFF`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}

/// Install the global logger writing to `path`, appending to earlier runs.
///
/// A level of [`LevelFilter::Off`] skips installation entirely.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_thread_level(LevelFilter::Debug)
		.set_target_level(LevelFilter::Error)
		.build();

	WriteLogger::init(level, config, file).context("a global logger is already installed")?;
	log::info!("logging initialised at {level}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_parse_case_insensitively() {
		assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
		assert_eq!(parse_level(" OFF "), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}

	#[test]
	fn off_level_does_not_touch_the_filesystem() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested/never.log");
		initialize(LevelFilter::Off, &path).unwrap();
		assert!(!path.exists());
	}
}
