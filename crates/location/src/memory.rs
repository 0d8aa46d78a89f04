//! In-memory location bridge for headless hosts and tests.

use crate::{Location, LocationBridge};

/// A [`LocationBridge`] that keeps the displayed address in memory.
///
/// Every requested address is recorded in order; the most recent one is
/// treated as displayed.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
	displayed: Location,
	requested: Vec<String>,
}

impl Default for MemoryLocation {
	fn default() -> Self {
		Self::new("/")
	}
}

impl MemoryLocation {
	/// Creates a bridge that initially displays `address`.
	///
	/// The initial address is not recorded as a request.
	pub fn new(address: &str) -> Self {
		Self {
			displayed: Location::parse(address),
			requested: Vec::new(),
		}
	}

	/// Addresses requested so far, oldest first.
	pub fn requested(&self) -> &[String] {
		&self.requested
	}

	/// Drains the recorded requests, keeping the displayed address.
	pub fn take_requested(&mut self) -> Vec<String> {
		std::mem::take(&mut self.requested)
	}

	/// Simulates the user editing the address bar or following a bookmark.
	///
	/// Unlike [`LocationBridge::navigate_to`], nothing is recorded.
	pub fn set_displayed(&mut self, address: &str) {
		self.displayed = Location::parse(address);
	}

	/// The presently displayed location.
	pub fn displayed(&self) -> &Location {
		&self.displayed
	}
}

impl LocationBridge for MemoryLocation {
	fn navigate_to(&mut self, address: &str) {
		tracing::trace!(address, "memory location navigate");
		self.displayed = Location::parse(address);
		self.requested.push(address.to_string());
	}

	fn current_path(&self) -> String {
		self.displayed.path.clone()
	}

	fn current_location(&self) -> Location {
		self.displayed.clone()
	}
}
