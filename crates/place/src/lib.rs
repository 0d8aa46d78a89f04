//! Navigable places and the factory that builds them.
//!
//! A [`Place`] is an immutable description of one screen the user can be on:
//! its canonical path, a localization key for its breadcrumb label, and the
//! parameters needed to render that label. Identity is the path alone; two
//! places with the same path are the same location however they are labelled.
//!
//! Screens never assemble paths by hand. They go through [`factory`], which
//! validates the identifying data and owns the route shapes, and through
//! [`to_full_path`] when they need an address for a link.

/// Error types for place construction.
pub mod error;
/// Constructors for every screen kind.
pub mod factory;
/// Input shapes accepted by the factory.
pub mod model;
mod path;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde::Serialize;
pub use trail_location::{Location, Search};

pub use error::{PlaceError, Result};
pub use path::{apply_current_location, apply_search, to_full_path, to_shareable_url};

/// Parameters used to render a place's label.
pub type DisplayParams = IndexMap<String, String>;

/// One navigable location.
///
/// Values are immutable once built; the `with_*` methods and the free
/// functions in this crate return modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
	path: String,
	title_key: String,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	display: DisplayParams,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	search: Search,
	current: bool,
}

impl Place {
	/// Creates a place at `path` labelled by `title_key`.
	///
	/// The path must be non-empty and absolute.
	pub fn new(path: impl Into<String>, title_key: impl Into<String>) -> Result<Self> {
		let path = path.into();
		if !path.starts_with('/') {
			return Err(PlaceError::InvalidPath(path));
		}

		Ok(Self {
			path,
			title_key: title_key.into(),
			display: DisplayParams::new(),
			search: Search::new(),
			current: false,
		})
	}

	/// Adds a label parameter.
	pub fn with_display(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.display.insert(key.into(), value.into());
		self
	}

	/// Adds a query parameter carried with the place.
	pub fn with_search(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.search.insert(key.into(), value.into());
		self
	}

	/// Canonical route, the identity of the place.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Localization key of the breadcrumb label.
	pub fn title_key(&self) -> &str {
		&self.title_key
	}

	/// Label parameters.
	pub fn display(&self) -> &DisplayParams {
		&self.display
	}

	/// Query parameters emitted with the path.
	pub fn search(&self) -> &Search {
		&self.search
	}

	/// Whether this place was tagged as the displayed location.
	pub fn is_current(&self) -> bool {
		self.current
	}

	/// Returns true if both places denote the same location.
	pub fn same_path(&self, other: &Place) -> bool {
		self.path == other.path
	}

	/// Returns a copy with the current-location tag set to `current`.
	pub fn tagged_current(&self, current: bool) -> Self {
		Self {
			current,
			..self.clone()
		}
	}
}
