//! Unbuffered broadcast channels for stack observers.
//!
//! A [`Notifier`] calls every registered listener synchronously, in
//! registration order, each time [`Notifier::emit`] runs. Registration hands
//! back a [`Subscription`]; dropping it removes the listener, so a screen that
//! goes away cannot leave a dangling callback behind.
//!
//! Listeners may subscribe or unsubscribe (including themselves) while being
//! called. Listeners added during an emission first hear the next one.

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slab::Slab;

type Listener<T> = Box<dyn FnMut(&T)>;

struct Slot<T: ?Sized> {
	/// Distinguishes successive occupants of a reused slab key.
	serial: u64,
	/// Taken out while the listener is running.
	listener: Option<Listener<T>>,
}

struct Registry<T: ?Sized> {
	slots: Slab<Slot<T>>,
	next_serial: u64,
}

/// Single-threaded broadcast channel.
pub struct Notifier<T: ?Sized + 'static> {
	registry: Rc<RefCell<Registry<T>>>,
}

impl<T: ?Sized + 'static> Default for Notifier<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: ?Sized + 'static> fmt::Debug for Notifier<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Notifier")
			.field("listeners", &self.len())
			.finish()
	}
}

impl<T: ?Sized + 'static> Notifier<T> {
	/// Creates a channel with no listeners.
	pub fn new() -> Self {
		Self {
			registry: Rc::new(RefCell::new(Registry {
				slots: Slab::new(),
				next_serial: 0,
			})),
		}
	}

	/// Registers `listener`; it stays registered until the returned
	/// [`Subscription`] is dropped.
	#[must_use = "dropping the subscription unregisters the listener"]
	pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
		let mut registry = self.registry.borrow_mut();
		let serial = registry.next_serial;
		registry.next_serial += 1;
		let key = registry.slots.insert(Slot {
			serial,
			listener: Some(Box::new(listener)),
		});

		let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
		Subscription {
			detach: Some(Box::new(move || {
				let Some(registry) = weak.upgrade() else {
					return;
				};
				// The removed listener is dropped after the borrow ends; it may
				// own subscriptions to this same notifier.
				let _removed = {
					let mut registry = registry.borrow_mut();
					registry
						.slots
						.get(key)
						.is_some_and(|slot| slot.serial == serial)
						.then(|| registry.slots.remove(key))
				};
			})),
		}
	}

	/// Calls every listener registered before this call with `value`.
	pub fn emit(&self, value: &T) {
		let targets: Vec<(usize, u64)> = self
			.registry
			.borrow()
			.slots
			.iter()
			.map(|(key, slot)| (key, slot.serial))
			.collect();

		for (key, serial) in targets {
			let listener = {
				let mut registry = self.registry.borrow_mut();
				match registry.slots.get_mut(key) {
					Some(slot) if slot.serial == serial => slot.listener.take(),
					_ => None,
				}
			};
			let Some(mut listener) = listener else {
				continue;
			};

			listener(value);

			let mut registry = self.registry.borrow_mut();
			if let Some(slot) = registry.slots.get_mut(key)
				&& slot.serial == serial
			{
				slot.listener = Some(listener);
			}
		}
	}

	/// Number of registered listeners.
	pub fn len(&self) -> usize {
		self.registry.borrow().slots.len()
	}

	/// Returns true if nobody is listening.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Handle that keeps a listener registered.
///
/// Dropping the handle, or calling [`Subscription::unsubscribe`], removes the
/// listener. Outliving the notifier is harmless.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
	detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Removes the listener now.
	pub fn unsubscribe(mut self) {
		self.detach_now();
	}

	fn detach_now(&mut self) {
		if let Some(detach) = self.detach.take() {
			detach();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.detach.is_some())
			.finish()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.detach_now();
	}
}
