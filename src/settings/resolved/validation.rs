use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted debounce.
pub(crate) const MAX_DEBOUNCE_MS: u128 = 5_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(threads) = config.scan.threads
		&& threads == 0
	{
		return Err(ConfigError::invalid(
			"scan.threads",
			threads.to_string(),
			sources.source_for("scan.threads"),
			"must be greater than zero",
		));
	}

	if let Some(max_depth) = config.scan.max_depth
		&& max_depth == 0
	{
		return Err(ConfigError::invalid(
			"scan.max_depth",
			max_depth.to_string(),
			sources.source_for("scan.max_depth"),
			"must be at least 1",
		));
	}

	let debounce_ms = config.ui.debounce.as_millis();
	if debounce_ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"ui.debounce_ms",
			debounce_ms.to_string(),
			sources.source_for("ui.debounce_ms"),
			format!("must not exceed {MAX_DEBOUNCE_MS}"),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use fsearch::{ScanOptions, Theme, UiConfig};
	use log::LevelFilter;

	use super::super::{LogSettings, SettingSource};
	use super::*;

	fn config(scan: ScanOptions, ui: UiConfig) -> ResolvedConfig {
		ResolvedConfig {
			root: PathBuf::from("/tmp"),
			scan,
			ui,
			theme: Theme::default(),
			log: LogSettings {
				level: LevelFilter::Info,
				file: None,
			},
		}
	}

	#[test]
	fn defaults_are_valid() {
		let config = config(ScanOptions::default(), UiConfig::default());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_threads() {
		let scan = ScanOptions {
			threads: Some(0),
			..ScanOptions::default()
		};
		let config = config(scan, UiConfig::default());

		let mut sources = ConfigSources::default();
		sources.record("scan.threads", Some(SettingSource::CliFlag("--threads")));

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "scan.threads");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_max_depth() {
		let scan = ScanOptions {
			max_depth: Some(0),
			..ScanOptions::default()
		};
		let config = config(scan, UiConfig::default());

		let mut sources = ConfigSources::default();
		sources.record(
			"scan.max_depth",
			Some(SettingSource::Environment("FSEARCH__SCAN__MAX_DEPTH".into())),
		);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "scan.max_depth");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_long_debounce_and_names_the_config_key() {
		let ui = UiConfig::default().with_debounce(Duration::from_millis(5_001));
		let config = config(ScanOptions::default(), ui);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.debounce_ms");
		assert_eq!(err.origin, SettingSource::ConfigKey("ui.debounce_ms"));
		assert!(err.to_string().contains("value: 5001"));
	}
}
