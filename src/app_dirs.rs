//! Where `fsearch` looks for `config.toml` and writes `fsearch.log`.
//!
//! `FSEARCH_CONFIG_DIR` and `FSEARCH_CACHE_DIR` take precedence over the
//! platform locations.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "fsearch";
const APPLICATION: &str = "fsearch";

const CONFIG_DIR_ENV: &str = "FSEARCH_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "FSEARCH_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for fsearch"))
}

/// An empty variable counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

fn resolve(env_name: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	match override_dir(env::var_os(env_name)) {
		Some(dir) => Ok(dir),
		None => Ok(platform(&project_dirs()?).to_path_buf()),
	}
}

/// Directory searched for the default `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory holding the default `fsearch.log`.
pub fn get_cache_dir() -> Result<PathBuf> {
	resolve(CACHE_DIR_ENV, ProjectDirs::cache_dir)
}
