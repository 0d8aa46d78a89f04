//! Error types for stack operations and configuration.

use std::path::PathBuf;

use thiserror::Error;
use trail_place::PlaceError;

use crate::PlaceHandle;

/// Errors raised by [`NavigationStack`](crate::NavigationStack) operations.
///
/// A failed operation leaves the stack exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
	/// The handle does not name an entry of the stack, usually because the
	/// entry was popped or replaced since the handle was taken.
	#[error("place {0} is not in the navigation stack")]
	NotInStack(PlaceHandle),

	/// A merge proposed a different home while the home policy is `reject`.
	#[error("merge proposed home {found:?} but the stack is rooted at {expected:?}")]
	HomeMismatch {
		/// Path of the current home entry.
		expected: String,
		/// Path of the proposed home entry.
		found: String,
	},

	#[error(transparent)]
	Place(#[from] PlaceError),
}

/// Result type for stack operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The configured home place is not a valid place.
	#[error("invalid home place: {0}")]
	Home(#[from] PlaceError),
}
