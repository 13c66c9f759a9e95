//! Errors raised while loading settings.

use std::path::PathBuf;

/// Settings loading error.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings: {message}")]
	Parse { message: String },
}

/// Result alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
