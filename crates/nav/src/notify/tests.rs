use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl FnMut(&u32) + 'static) {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	(seen, move |v: &u32| sink.borrow_mut().push(*v))
}

#[test]
fn emit_reaches_every_listener_in_order() {
	let notifier = Notifier::<u32>::new();
	let log = Rc::new(RefCell::new(Vec::new()));

	let a = {
		let log = Rc::clone(&log);
		notifier.subscribe(move |v| log.borrow_mut().push(("a", *v)))
	};
	let b = {
		let log = Rc::clone(&log);
		notifier.subscribe(move |v| log.borrow_mut().push(("b", *v)))
	};

	notifier.emit(&7);
	assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
	assert_eq!(notifier.len(), 2);

	drop((a, b));
}

#[test]
fn dropping_subscription_unregisters() {
	let notifier = Notifier::<u32>::new();
	let (seen, listener) = recorder();
	let sub = notifier.subscribe(listener);

	notifier.emit(&1);
	drop(sub);
	notifier.emit(&2);

	assert_eq!(*seen.borrow(), vec![1]);
	assert!(notifier.is_empty());
}

#[test]
fn explicit_unsubscribe() {
	let notifier = Notifier::<u32>::new();
	let (seen, listener) = recorder();
	let sub = notifier.subscribe(listener);
	sub.unsubscribe();
	notifier.emit(&1);
	assert!(seen.borrow().is_empty());
}

#[test]
fn subscription_outliving_notifier_is_harmless() {
	let notifier = Notifier::<u32>::new();
	let sub = notifier.subscribe(|_| {});
	drop(notifier);
	drop(sub);
}

#[test]
fn listener_can_unsubscribe_itself_during_emit() {
	let notifier = Notifier::<u32>::new();
	let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
	let calls = Rc::new(RefCell::new(0));

	let sub = {
		let slot = Rc::clone(&slot);
		let calls = Rc::clone(&calls);
		notifier.subscribe(move |_| {
			*calls.borrow_mut() += 1;
			slot.borrow_mut().take();
		})
	};
	*slot.borrow_mut() = Some(sub);

	notifier.emit(&1);
	notifier.emit(&2);

	assert_eq!(*calls.borrow(), 1);
	assert!(notifier.is_empty());
}

#[test]
fn listener_added_during_emit_waits_for_next_emit() {
	let notifier = Rc::new(Notifier::<u32>::new());
	let (seen, late_listener) = recorder();
	let late_listener = RefCell::new(Some(late_listener));
	let late_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

	let _sub = {
		let notifier_ref = Rc::downgrade(&notifier);
		let late_sub = Rc::clone(&late_sub);
		notifier.subscribe(move |_| {
			if let Some(listener) = late_listener.borrow_mut().take()
				&& let Some(notifier) = notifier_ref.upgrade()
			{
				*late_sub.borrow_mut() = Some(notifier.subscribe(listener));
			}
		})
	};

	notifier.emit(&1);
	assert!(seen.borrow().is_empty());

	notifier.emit(&2);
	assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn unsized_payloads() {
	let notifier = Notifier::<[u32]>::new();
	let total = Rc::new(RefCell::new(0));
	let _sub = {
		let total = Rc::clone(&total);
		notifier.subscribe(move |items: &[u32]| *total.borrow_mut() += items.iter().sum::<u32>())
	};
	notifier.emit(&[1, 2, 3]);
	assert_eq!(*total.borrow(), 6);
}
