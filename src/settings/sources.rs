use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use fsearch::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment variables such as `FSEARCH__SCAN__THREADS`.
pub(super) const ENV_PREFIX: &str = "FSEARCH";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("scan.global_ignores"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".fsearch.toml"));
		files.push(current_dir.join("fsearch.toml"));
	}

	files
}

/// Environment variable that would carry `section.key`.
pub(super) fn env_var_for(key: &str) -> String {
	format!("{ENV_PREFIX}__{}", key.replace('.', "__").to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".fsearch.toml")));
		assert!(files.iter().any(|path| path.ends_with("fsearch.toml")));
	}

	#[test]
	fn env_var_names_follow_the_section_layout() {
		assert_eq!(env_var_for("scan.max_depth"), "FSEARCH__SCAN__MAX_DEPTH");
		assert_eq!(env_var_for("ui.debounce_ms"), "FSEARCH__UI__DEBOUNCE_MS");
	}

	#[test]
	fn explicit_config_files_are_merged_in_order() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[scan]\nthreads = 2\nmax_depth = 4\n").unwrap();
		fs::write(&second, "[scan]\nthreads = 6\n").unwrap();

		let cli = CliArgs::parse_from([
			"fsearch",
			"--no-config",
			"--config",
			first.to_str().unwrap(),
			"--config",
			second.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();

		assert_eq!(config.get_int("scan.threads").unwrap(), 6);
		assert_eq!(config.get_int("scan.max_depth").unwrap(), 4);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["fsearch", "--no-config", "--config", missing.to_str().unwrap()]);
		assert!(build_config(&cli).is_err());
	}
}
