//! The navigation breadcrumb stack.
//!
//! [`NavigationStack`] holds the ordered places the user has traversed in this
//! session, index 0 being home. Entries live in an arena and are addressed by
//! [`PlaceHandle`]s, which stay valid for exactly as long as the entry stays on
//! the stack. Breadcrumb links hold handles, so returning to an ancestor works
//! by identity rather than by path.
//!
//! # Invariants
//!
//! - The stack is never empty. Resets re-seed with at least the home place.
//! - No two adjacent entries share a path.
//! - Only the top entry can carry the current-location tag.
//! - A failed operation leaves the stack, the location and the observers
//!   untouched.
//!
//! # Operations
//!
//! | operation                                        | navigates | notifies       |
//! |--------------------------------------------------|-----------|----------------|
//! | [`push_and_navigate`](NavigationStack::push_and_navigate)       | yes | change |
//! | [`pop_and_navigate`](NavigationStack::pop_and_navigate)         | yes | change |
//! | [`pop_to_and_navigate`](NavigationStack::pop_to_and_navigate)   | yes | change |
//! | [`reset_and_navigate`](NavigationStack::reset_and_navigate)     | yes | change, reset |
//! | [`merge_complete_stack`](NavigationStack::merge_complete_stack) | no  | change |
//! | [`pop`](NavigationStack::pop)                                   | no  | change |


use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;
use trail_location::LocationBridge;
use trail_place::{Place, apply_current_location, to_full_path, to_shareable_url};
use url::Url;

use crate::config::{HomePolicy, NavConfig};
use crate::error::{NavError, Result};
use crate::notify::{Notifier, Subscription};

/// Counter for entry serials, shared by all stacks so that a handle issued by
/// one stack never matches an entry of another.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a stack entry.
///
/// Handles compare equal only to the entry they were issued for; a handle
/// whose entry has left the stack never matches a later entry, even one with
/// the same path or arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceHandle {
	key: usize,
	serial: u64,
}

impl fmt::Display for PlaceHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.serial)
	}
}

/// One entry of a stack snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
	pub handle: PlaceHandle,
	pub place: Rc<Place>,
}

struct Entry {
	serial: u64,
	place: Rc<Place>,
}

/// Ordered session history of places.
pub struct NavigationStack<L> {
	arena: Slab<Entry>,
	order: Vec<PlaceHandle>,
	home: Place,
	config: NavConfig,
	location: L,
	changes: Notifier<[Crumb]>,
	resets: Notifier<()>,
}

impl<L: LocationBridge> NavigationStack<L> {
	/// Creates a stack holding only `home`.
	///
	/// Nothing is navigated; the host is assumed to be displaying whatever
	/// address it loaded with.
	pub fn new(location: L, home: Place) -> Self {
		Self::with_parts(location, home, NavConfig::default())
	}

	/// Creates a stack whose home place and merge policy come from `config`.
	pub fn from_config(location: L, config: NavConfig) -> Result<Self> {
		let home = config.home()?;
		Ok(Self::with_parts(location, home, config))
	}

	fn with_parts(location: L, home: Place, config: NavConfig) -> Self {
		let mut stack = Self {
			arena: Slab::new(),
			order: Vec::new(),
			home: home.tagged_current(false),
			config,
			location,
			changes: Notifier::new(),
			resets: Notifier::new(),
		};
		let handle = stack.insert(stack.home.clone());
		stack.order.push(handle);
		stack
	}

	/// Appends `place` and navigates to it.
	///
	/// When `place` has the same path as the top entry nothing is appended,
	/// but the navigation still happens. Returns the handle of the top entry.
	pub fn push_and_navigate(&mut self, place: Place) -> PlaceHandle {
		let address = to_full_path(&place, None);
		let top = self.top();

		let handle = if self.place(top).same_path(&place) {
			tracing::trace!(path = place.path(), "push of current top suppressed");
			top
		} else {
			let handle = self.insert(place);
			self.order.push(handle);
			tracing::debug!(%handle, %address, depth = self.order.len(), "push");
			handle
		};
		self.untag_below_top();

		self.location.navigate_to(&address);
		self.notify_changed();
		handle
	}

	/// Removes the top entry and navigates to the new top.
	///
	/// Returns false, without navigating or notifying, when only home is left.
	pub fn pop_and_navigate(&mut self) -> bool {
		if self.pop_entry().is_none() {
			tracing::trace!("pop at home ignored");
			return false;
		}

		self.navigate_to_top();
		self.notify_changed();
		true
	}

	/// Removes the top entry without navigating.
	///
	/// Used when the displayed address is about to be replaced by other means
	/// (e.g. a save that redirects). Returns `None` when only home is left.
	pub fn pop(&mut self) -> Option<Place> {
		let place = self.pop_entry()?;
		self.notify_changed();
		Some(Rc::unwrap_or_clone(place))
	}

	/// Truncates the stack so that `target` is the top, and navigates to it.
	///
	/// Fails with [`NavError::NotInStack`] if `target` is not a live entry;
	/// the stack is then unchanged.
	pub fn pop_to_and_navigate(&mut self, target: PlaceHandle) -> Result<()> {
		let Some(index) = self.index_of(target) else {
			tracing::warn!(%target, "pop-to target is not in the stack");
			return Err(NavError::NotInStack(target));
		};

		let removed = self.order.len() - index - 1;
		for handle in self.order.drain(index + 1..) {
			self.arena.remove(handle.key);
		}
		tracing::debug!(%target, removed, "pop to");

		self.navigate_to_top();
		self.notify_changed();
		Ok(())
	}

	/// Replaces the whole stack with `places` and navigates to the last one.
	///
	/// Adjacent repeats are collapsed. An empty list re-seeds with home.
	/// Besides the change notification, reset observers are told once.
	pub fn reset_and_navigate(&mut self, places: impl IntoIterator<Item = Place>) {
		let mut places = collapse_adjacent(places);
		if places.is_empty() {
			places.push(self.home.clone());
		}

		self.replace_all(places);
		tracing::debug!(depth = self.order.len(), "reset");

		self.navigate_to_top();
		self.notify_changed();
		self.resets.emit(&());
	}

	/// Resets to the home place alone, e.g. after logout.
	pub fn reset(&mut self) {
		self.reset_and_navigate([self.home.clone()]);
	}

	/// Reconciles the stack with the ancestor chain a screen derived from
	/// the displayed address.
	///
	/// Entries that agree by path with the start of `places` are kept as they
	/// are, handles included, so breadcrumb links rendered earlier keep
	/// working. The rest of `places` is appended as new entries and the last
	/// one is tagged as the current location. Nothing is navigated.
	///
	/// An empty list falls back to home alone. If the first place differs
	/// from the current home, the configured [`HomePolicy`] decides between
	/// adopting the new chain wholesale and failing with
	/// [`NavError::HomeMismatch`].
	pub fn merge_complete_stack(&mut self, places: impl IntoIterator<Item = Place>) -> Result<()> {
		let proposed = collapse_adjacent(places);

		let Some(first) = proposed.first() else {
			tracing::debug!("merge of empty chain, falling back to home");
			if self.place(self.order[0]).same_path(&self.home) {
				for handle in self.order.drain(1..) {
					self.arena.remove(handle.key);
				}
			} else {
				self.replace_all(vec![self.home.clone()]);
			}
			self.notify_changed();
			return Ok(());
		};

		let home = self.place(self.order[0]);
		if !home.same_path(first) && self.config.merge_home == HomePolicy::Reject {
			tracing::warn!(
				expected = home.path(),
				found = first.path(),
				"merge rejected, home differs"
			);
			return Err(NavError::HomeMismatch {
				expected: home.path().to_string(),
				found: first.path().to_string(),
			});
		}

		let kept = self
			.order
			.iter()
			.zip(&proposed)
			.take_while(|(handle, place)| self.place(**handle).same_path(place))
			.count();

		for handle in self.order.drain(kept..) {
			self.arena.remove(handle.key);
		}
		for place in proposed.into_iter().skip(kept) {
			let handle = self.insert(place);
			self.order.push(handle);
		}

		let top = self.top();
		let displayed = self.location.current_location();
		let tagged = apply_current_location(self.place(top), &displayed);
		self.arena[top.key].place = Rc::new(tagged);
		self.untag_below_top();

		tracing::debug!(kept, depth = self.order.len(), "merge");
		self.notify_changed();
		Ok(())
	}

	/// The top entry's place.
	pub fn peek(&self) -> &Place {
		self.place(self.top())
	}

	/// The top entry's handle.
	pub fn peek_handle(&self) -> PlaceHandle {
		self.top()
	}

	/// Snapshot of the stack, home first.
	pub fn stack(&self) -> Vec<Crumb> {
		self.order
			.iter()
			.map(|&handle| Crumb {
				handle,
				place: Rc::clone(&self.arena[handle.key].place),
			})
			.collect()
	}

	/// Number of entries; never zero.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// Always false; provided for symmetry with [`len`](Self::len).
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// The place behind `handle`, if it is still on the stack.
	pub fn get(&self, handle: PlaceHandle) -> Option<&Place> {
		self.arena
			.get(handle.key)
			.filter(|entry| entry.serial == handle.serial)
			.map(|entry| entry.place.as_ref())
	}

	/// Returns true if `handle` names a live entry.
	pub fn contains(&self, handle: PlaceHandle) -> bool {
		self.get(handle).is_some()
	}

	/// The entry matching the displayed path, nearest the top.
	pub fn active_handle(&self) -> Option<PlaceHandle> {
		let current = self.location.current_path();
		self.order
			.iter()
			.rev()
			.find(|&&handle| self.place(handle).path() == current)
			.copied()
	}

	/// Returns true if `handle` is the entry matching the displayed path.
	pub fn is_active(&self, handle: PlaceHandle) -> bool {
		self.active_handle() == Some(handle)
	}

	/// Absolute link to the entry behind `handle`.
	///
	/// `Ok(None)` when no `base-url` is configured.
	pub fn shareable_url(&self, handle: PlaceHandle) -> Result<Option<Url>> {
		let place = self.get(handle).ok_or(NavError::NotInStack(handle))?;
		match &self.config.base_url {
			Some(base) => Ok(Some(to_shareable_url(base, place, None)?)),
			None => Ok(None),
		}
	}

	/// Registers a listener for every completed mutation.
	#[must_use = "dropping the subscription unregisters the listener"]
	pub fn on_change(&self, listener: impl FnMut(&[Crumb]) + 'static) -> Subscription {
		self.changes.subscribe(listener)
	}

	/// Registers a listener for full resets only.
	#[must_use = "dropping the subscription unregisters the listener"]
	pub fn on_reset(&self, mut listener: impl FnMut() + 'static) -> Subscription {
		self.resets.subscribe(move |_: &()| listener())
	}

	/// The home place used for re-seeding.
	pub fn home(&self) -> &Place {
		&self.home
	}

	pub fn config(&self) -> &NavConfig {
		&self.config
	}

	pub fn location(&self) -> &L {
		&self.location
	}

	pub fn location_mut(&mut self) -> &mut L {
		&mut self.location
	}

	fn top(&self) -> PlaceHandle {
		self.order[self.order.len() - 1]
	}

	fn place(&self, handle: PlaceHandle) -> &Place {
		&self.arena[handle.key].place
	}

	fn index_of(&self, handle: PlaceHandle) -> Option<usize> {
		if !self.contains(handle) {
			return None;
		}
		self.order.iter().rposition(|&h| h == handle)
	}

	fn insert(&mut self, place: Place) -> PlaceHandle {
		let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
		let key = self.arena.insert(Entry {
			serial,
			place: Rc::new(place),
		});
		PlaceHandle { key, serial }
	}

	/// Pops the top unless it is home.
	fn pop_entry(&mut self) -> Option<Rc<Place>> {
		if self.order.len() <= 1 {
			return None;
		}
		let handle = self.order.pop()?;
		let entry = self.arena.remove(handle.key);
		tracing::debug!(%handle, path = entry.place.path(), depth = self.order.len(), "pop");
		Some(entry.place)
	}

	fn replace_all(&mut self, places: Vec<Place>) {
		self.arena.clear();
		self.order.clear();
		for place in places {
			let handle = self.insert(place);
			self.order.push(handle);
		}
	}

	/// Clears the current-location tag everywhere but the top entry.
	///
	/// Runs on every navigation; a tag left lower down would name an address
	/// that is no longer displayed.
	fn untag_below_top(&mut self) {
		let below = self.order.len() - 1;
		for handle in &self.order[..below] {
			let entry = &mut self.arena[handle.key];
			if entry.place.is_current() {
				entry.place = Rc::new(entry.place.tagged_current(false));
			}
		}
	}

	fn navigate_to_top(&mut self) {
		self.untag_below_top();
		let address = to_full_path(self.peek(), None);
		self.location.navigate_to(&address);
	}

	fn notify_changed(&self) {
		let snapshot = self.stack();
		self.changes.emit(&snapshot);
	}
}

impl<L> fmt::Debug for NavigationStack<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let paths: Vec<&str> = self
			.order
			.iter()
			.map(|handle| self.arena[handle.key].place.path())
			.collect();
		f.debug_struct("NavigationStack")
			.field("paths", &paths)
			.field("listeners", &self.changes.len())
			.finish()
	}
}

/// Drops each place whose path repeats its predecessor's.
fn collapse_adjacent(places: impl IntoIterator<Item = Place>) -> Vec<Place> {
	let mut collapsed: Vec<Place> = Vec::new();
	for place in places {
		if collapsed.last().is_some_and(|last| last.same_path(&place)) {
			continue;
		}
		collapsed.push(place);
	}
	collapsed
}
