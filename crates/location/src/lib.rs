//! Displayed-address model and the bridge to the host's location bar.
//!
//! The navigation stack never touches the host's address mechanism directly.
//! It asks a [`LocationBridge`] to display a new address and reads the
//! presently displayed one back when deciding which breadcrumb is active.
//!
//! # Addresses
//!
//! An address is a path plus an optional form-urlencoded query:
//!
//! ```text
//! /pkg/foo/changelog?natlangcode=de&bcguid=bc12
//! ```
//!
//! [`Location`] is the parsed form. Query pairs keep their insertion order so
//! that re-encoding an address is stable.

#[cfg(test)]
mod tests;

mod memory;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use memory::MemoryLocation;

/// Ordered query parameters of an address.
pub type Search = IndexMap<String, String>;

/// A parsed displayed address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	/// Path component, always starting with `/`.
	pub path: String,
	/// Decoded query parameters.
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub search: Search,
}

impl Location {
	/// Creates a location for `path` with no query.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: normalize_path(path.into()),
			search: Search::new(),
		}
	}

	/// Parses an address of the form `path[?query][#fragment]`.
	///
	/// The fragment is discarded. Repeated query keys keep the last value.
	pub fn parse(address: &str) -> Self {
		let address = address.split_once('#').map_or(address, |(head, _)| head);
		let (path, query) = match address.split_once('?') {
			Some((path, query)) => (path, Some(query)),
			None => (address, None),
		};

		let search = query.map(decode_search).unwrap_or_default();

		Self {
			path: normalize_path(path.to_string()),
			search,
		}
	}

	/// Renders the location back into an address.
	pub fn to_address(&self) -> String {
		append_search(&self.path, self.search.iter())
	}
}

/// Decodes a form-urlencoded query string.
pub fn decode_search(query: &str) -> Search {
	url::form_urlencoded::parse(query.as_bytes())
		.map(|(k, v)| (k.into_owned(), v.into_owned()))
		.collect()
}

/// Appends `pairs` to `path` as a form-urlencoded query.
///
/// Returns `path` unchanged when there are no pairs.
pub fn append_search<'a, I>(path: &str, pairs: I) -> String
where
	I: IntoIterator<Item = (&'a String, &'a String)>,
{
	let mut pairs = pairs.into_iter().peekable();
	if pairs.peek().is_none() {
		return path.to_string();
	}

	let query = url::form_urlencoded::Serializer::new(String::new())
		.extend_pairs(pairs)
		.finish();
	format!("{path}?{query}")
}

fn normalize_path(path: String) -> String {
	if path.starts_with('/') { path } else { format!("/{path}") }
}

/// Adapter to the host's displayed-address mechanism.
///
/// Implementations must not fail for well-formed addresses; a rejected
/// address change is the host's problem, not the stack's.
pub trait LocationBridge {
	/// Requests that the host display `address`.
	///
	/// Fire-and-forget from the caller's perspective.
	fn navigate_to(&mut self, address: &str);

	/// Path of the presently displayed address.
	fn current_path(&self) -> String;

	/// The presently displayed address including its query.
	///
	/// Bridges that cannot observe the query fall back to the path alone.
	fn current_location(&self) -> Location {
		Location::new(self.current_path())
	}
}

impl<B: LocationBridge + ?Sized> LocationBridge for Box<B> {
	fn navigate_to(&mut self, address: &str) {
		(**self).navigate_to(address);
	}

	fn current_path(&self) -> String {
		(**self).current_path()
	}

	fn current_location(&self) -> Location {
		(**self).current_location()
	}
}
