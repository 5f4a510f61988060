use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use fsearch::ScanOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Walk and match options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ScanSection {
	pub(super) root: Option<PathBuf>,
	pub(super) include_hidden: Option<bool>,
	pub(super) follow_symlinks: Option<bool>,
	pub(super) respect_ignore_files: Option<bool>,
	pub(super) git_ignore: Option<bool>,
	pub(super) git_global: Option<bool>,
	pub(super) git_exclude: Option<bool>,
	pub(super) ignore_case: Option<bool>,
	pub(super) threads: Option<usize>,
	pub(super) max_depth: Option<usize>,
	pub(super) global_ignores: Option<Vec<String>>,
}

impl ScanSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(root) = cli.root.clone() {
			self.root = Some(root);
		}
		if let Some(value) = cli.hidden {
			self.include_hidden = Some(value);
		}
		if let Some(value) = cli.follow_symlinks {
			self.follow_symlinks = Some(value);
		}
		if let Some(value) = cli.respect_ignore_files {
			self.respect_ignore_files = Some(value);
		}
		if let Some(value) = cli.git_ignore {
			self.git_ignore = Some(value);
			self.git_global = Some(value);
			self.git_exclude = Some(value);
		}
		if let Some(value) = cli.ignore_case {
			self.ignore_case = Some(value);
		}
		if let Some(value) = cli.threads {
			self.threads = Some(value);
		}
		if let Some(value) = cli.max_depth {
			self.max_depth = Some(value);
		}
		if let Some(value) = &cli.global_ignores {
			self.global_ignores = Some(value.clone());
		}
	}

	/// Resolve the root to an existing canonical directory and fill option defaults.
	pub(super) fn resolve(self) -> Result<(PathBuf, ScanOptions)> {
		let mut root = match self.root {
			Some(path) => path,
			None => env::current_dir().context("failed to determine working directory")?,
		};
		if root.is_relative() {
			root = env::current_dir()
				.context("failed to resolve current directory for root")?
				.join(root);
		}
		root = fs::canonicalize(&root)
			.with_context(|| format!("failed to canonicalize search root {}", root.display()))?;

		let metadata = fs::metadata(&root)
			.with_context(|| format!("failed to inspect search root {}", root.display()))?;
		ensure!(
			metadata.is_dir(),
			"search root {} must be a directory",
			root.display()
		);

		let defaults = ScanOptions::default();
		let options = ScanOptions {
			include_hidden: self.include_hidden.unwrap_or(defaults.include_hidden),
			follow_symlinks: self.follow_symlinks.unwrap_or(defaults.follow_symlinks),
			respect_ignore_files: self
				.respect_ignore_files
				.unwrap_or(defaults.respect_ignore_files),
			git_ignore: self.git_ignore.unwrap_or(defaults.git_ignore),
			git_global: self.git_global.unwrap_or(defaults.git_global),
			git_exclude: self.git_exclude.unwrap_or(defaults.git_exclude),
			ignore_case: self.ignore_case.unwrap_or(defaults.ignore_case),
			threads: self.threads,
			max_depth: self.max_depth,
			global_ignores: self
				.global_ignores
				.map(sanitize_names)
				.unwrap_or_default(),
		};

		Ok((root, options))
	}
}

/// Trim names and drop empty or repeated entries, keeping the first occurrence.
fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::new();
	for value in values {
		let name = value.trim();
		if name.is_empty() || cleaned.iter().any(|existing| existing == name) {
			continue;
		}
		cleaned.push(name.to_string());
	}
	cleaned
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_names(vec![" target ".into(), "".into(), "target".into(), ".git".into()]);
		assert_eq!(cleaned, vec!["target", ".git"]);
	}

	#[test]
	fn root_is_canonicalised_and_must_be_a_directory() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("nested");
		fs::create_dir(&nested).unwrap();
		let file = dir.path().join("file.txt");
		fs::write(&file, b"").unwrap();

		let section = ScanSection {
			root: Some(nested.join("..").join("nested")),
			..ScanSection::default()
		};
		let (root, options) = section.resolve().unwrap();
		assert_eq!(root, fs::canonicalize(&nested).unwrap());
		assert!(options.include_hidden);
		assert!(!options.respect_ignore_files);

		let section = ScanSection {
			root: Some(file),
			..ScanSection::default()
		};
		assert!(section.resolve().is_err());

		let section = ScanSection {
			root: Some(dir.path().join("missing")),
			..ScanSection::default()
		};
		assert!(section.resolve().is_err());
	}
}
