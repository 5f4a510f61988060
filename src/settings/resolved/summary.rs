use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let scan = &config.scan;
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Root: {}", config.root.display());
	let _ = writeln!(out, "  Include hidden: {}", bool_to_word(scan.include_hidden));
	let _ = writeln!(out, "  Follow symlinks: {}", bool_to_word(scan.follow_symlinks));
	let _ = writeln!(
		out,
		"  Respect ignore files: {}",
		bool_to_word(scan.respect_ignore_files)
	);
	let _ = writeln!(out, "  Git ignore: {}", bool_to_word(scan.git_ignore));
	let _ = writeln!(out, "  Git global: {}", bool_to_word(scan.git_global));
	let _ = writeln!(out, "  Git exclude: {}", bool_to_word(scan.git_exclude));
	let _ = writeln!(out, "  Ignore case: {}", bool_to_word(scan.ignore_case));
	match scan.max_depth {
		Some(depth) => {
			let _ = writeln!(out, "  Max depth: {depth}");
		}
		None => {
			let _ = writeln!(out, "  Max depth: unlimited");
		}
	}
	let _ = writeln!(out, "  Threads: {}", scan.thread_count());
	if !scan.global_ignores.is_empty() {
		let _ = writeln!(out, "  Global ignores: {}", scan.global_ignores.join(", "));
	}
	let _ = writeln!(out, "  Prompt: {}", config.ui.prompt);
	if !config.ui.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.ui.initial_query);
	}
	let _ = writeln!(out, "  Debounce: {} ms", config.ui.debounce.as_millis());
	let _ = writeln!(out, "  Selected marker: {:?}", config.ui.selected_marker);
	if let Some(color) = config.theme.selected.fg {
		let _ = writeln!(out, "  Selected colour: {color}");
	}
	if let Some(color) = config.theme.error.fg {
		let _ = writeln!(out, "  Error colour: {color}");
	}
	let _ = writeln!(out, "  Log level: {}", config.log.level);
	match &config.log.file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Log file: (cache directory default)");
		}
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use fsearch::{ScanOptions, Theme, UiConfig};
	use log::LevelFilter;

	use super::super::LogSettings;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_the_effective_values() {
		let config = ResolvedConfig {
			root: PathBuf::from("/tmp"),
			scan: ScanOptions {
				max_depth: Some(3),
				global_ignores: vec!["target".into()],
				..ScanOptions::default()
			},
			ui: UiConfig::default().with_initial_query("foo"),
			theme: Theme::default(),
			log: LogSettings {
				level: LevelFilter::Debug,
				file: Some(PathBuf::from("/tmp/fsearch.log")),
			},
		};

		let summary = render_summary(&config);
		assert!(summary.contains("Root: /tmp"));
		assert!(summary.contains("Include hidden: yes"));
		assert!(summary.contains("Max depth: 3"));
		assert!(summary.contains("Global ignores: target"));
		assert!(summary.contains("Initial query: foo"));
		assert!(summary.contains("Log level: DEBUG"));
		assert!(summary.contains("Log file: /tmp/fsearch.log"));
	}
}
