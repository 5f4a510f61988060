use std::collections::HashSet;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::thread;

use crate::systems::search::MatchMode;

/// Options controlling how a scan walks the tree and matches names.
///
/// The defaults visit every entry under the root. Ignore-file handling and
/// hidden-file filtering are opt-in.
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Include hidden files and directories.
	pub include_hidden: bool,
	/// Follow symbolic links during traversal.
	pub follow_symlinks: bool,
	/// Respect .ignore files.
	pub respect_ignore_files: bool,
	/// Respect .gitignore files.
	pub git_ignore: bool,
	/// Respect global gitignore settings.
	pub git_global: bool,
	/// Respect git exclude files.
	pub git_exclude: bool,
	/// Directory or file names never descended into or reported.
	pub global_ignores: Vec<String>,
	/// Number of walker threads.
	pub threads: Option<usize>,
	/// Maximum directory traversal depth.
	pub max_depth: Option<usize>,
	/// Compare names case-insensitively.
	pub ignore_case: bool,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			include_hidden: true,
			follow_symlinks: false,
			respect_ignore_files: false,
			git_ignore: false,
			git_global: false,
			git_exclude: false,
			global_ignores: Vec::new(),
			threads: None,
			max_depth: None,
			ignore_case: false,
		}
	}
}

impl ScanOptions {
	/// Create a set of names to globally ignore.
	pub fn global_ignore_set(&self) -> HashSet<OsString> {
		self.global_ignores
			.iter()
			.map(|entry| OsString::from(entry.as_str()))
			.collect()
	}

	/// Resolve the effective thread count, defaulting to available parallelism.
	pub fn thread_count(&self) -> usize {
		self.threads
			.filter(|threads| *threads > 0)
			.unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get))
	}

	pub fn match_mode(&self) -> MatchMode {
		MatchMode::from_ignore_case(self.ignore_case)
	}
}
