//! Error types for place construction.

use thiserror::Error;

/// Errors raised while building or rendering a [`Place`](crate::Place).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceError {
	/// A required identifying field was missing or empty.
	#[error("invalid argument `{field}`: {reason}")]
	InvalidArgument {
		/// Name of the offending field.
		field: &'static str,
		/// Why the value was rejected.
		reason: &'static str,
	},

	/// A place path was empty or not absolute.
	#[error("invalid place path {0:?} (expected a non-empty path starting with '/')")]
	InvalidPath(String),

	/// A shareable URL could not be formed.
	#[error("invalid url: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

impl PlaceError {
	pub(crate) fn missing(field: &'static str) -> Self {
		Self::InvalidArgument {
			field,
			reason: "must be supplied",
		}
	}
}

/// Result type for place operations.
pub type Result<T> = std::result::Result<T, PlaceError>;
