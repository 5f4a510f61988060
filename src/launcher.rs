//! Opening a selected file with the platform's default application.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
	#[error("{} does not exist", .0.display())]
	Missing(PathBuf),
	#[error("no default application could open {}: {source}", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Something that can hand a file to another program.
pub trait Launcher {
	fn open(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Launcher backed by the OS opener (`xdg-open`, `open`, `start`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
	fn open(&self, path: &Path) -> Result<(), LaunchError> {
		if !path.exists() {
			return Err(LaunchError::Missing(path.to_path_buf()));
		}
		open::that_detached(path).map_err(|source| LaunchError::Open {
			path: path.to_path_buf(),
			source,
		})
	}
}
