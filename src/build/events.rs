//! Change notification plumbing.
//!
//! Synchronous publish/subscribe used to invalidate derived build-step
//! state. Dispatch happens on the caller's thread in registration order;
//! there is no queueing and no parallelism.

use tracing::debug;

/// Project-state changes the build step reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
	/// The selected kit changed; derived state must always be recomputed.
	KitChanged,
	EnvironmentChanged { config_id: String },
	BuildDirectoryChanged { config_id: String },
	ActiveConfigChanged { config_id: String },
}

type Subscriber = Box<dyn FnMut(&BuildEvent)>;

/// Minimal synchronous event bus.
#[derive(Default)]
pub struct EventBus {
	subscribers: Vec<Subscriber>,
}

impl EventBus {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&mut self, subscriber: impl FnMut(&BuildEvent) + 'static) {
		self.subscribers.push(Box::new(subscriber));
	}

	pub fn emit(&mut self, event: &BuildEvent) {
		debug!(?event, subscribers = self.subscribers.len(), "dispatching build event");
		for subscriber in &mut self.subscribers {
			subscriber(event);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[test]
	fn test_subscribers_run_in_registration_order() {
		let order: Rc<RefCell<Vec<u8>>> = Rc::default();
		let mut bus = EventBus::new();
		for tag in [1u8, 2, 3] {
			let order = Rc::clone(&order);
			bus.subscribe(move |_| order.borrow_mut().push(tag));
		}
		bus.emit(&BuildEvent::KitChanged);
		assert_eq!(*order.borrow(), vec![1, 2, 3]);
	}

	#[test]
	fn test_event_payload_reaches_subscriber() {
		let seen: Rc<RefCell<Option<BuildEvent>>> = Rc::default();
		let sink = Rc::clone(&seen);
		let mut bus = EventBus::new();
		bus.subscribe(move |event| *sink.borrow_mut() = Some(event.clone()));
		bus.emit(&BuildEvent::EnvironmentChanged {
			config_id: "debug".to_owned(),
		});
		assert_eq!(
			*seen.borrow(),
			Some(BuildEvent::EnvironmentChanged {
				config_id: "debug".to_owned()
			})
		);
	}
}
