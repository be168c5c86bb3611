use core::{cell::RefCell, time::Duration};
use hashbrown::HashMap;
use tracing::{debug, trace};

/// A deferred continuation.
pub type Task = Box<dyn FnOnce()>;

/// Defers tasks by a fixed delay, at most one pending task per key.
///
/// Keys are element ids: scheduling under a key that still has a pending task cancels that task.
pub trait Scheduler {
	fn schedule(&self, key: String, delay: Duration, task: Task);

	/// Cancels the pending task under `key`, if any. Returns whether one was cancelled.
	fn cancel(&self, key: &str) -> bool;
}

struct Pending {
	due: Duration,
	sequence: u64,
	task: Task,
}

#[derive(Default)]
struct ManualState {
	now: Duration,
	next_sequence: u64,
	pending: HashMap<String, Pending>,
}

/// A [`Scheduler`] on a virtual clock that only moves when [`advance`](`ManualScheduler::advance`)d.
///
/// Tasks due at the same instant run in scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
	state: RefCell<ManualState>,
}

impl ManualScheduler {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Time elapsed on the virtual clock.
	#[must_use]
	pub fn now(&self) -> Duration {
		self.state.borrow().now
	}

	#[must_use]
	pub fn pending(&self) -> usize {
		self.state.borrow().pending.len()
	}

	#[must_use]
	pub fn is_pending(&self, key: &str) -> bool {
		self.state.borrow().pending.contains_key(key)
	}

	/// Moves the clock forward by `by`, running every task that falls due on the way.
	///
	/// Tasks may schedule further tasks; those run too if they fall due within the window.
	pub fn advance(&self, by: Duration) {
		let target = self.now() + by;
		loop {
			let task = {
				let mut state = self.state.borrow_mut();
				let next = state
					.pending
					.iter()
					.filter(|(_, pending)| pending.due <= target)
					.min_by_key(|(_, pending)| (pending.due, pending.sequence))
					.map(|(key, _)| key.clone());
				match next.and_then(|key| state.pending.remove(&key).map(|pending| (key, pending))) {
					Some((key, pending)) => {
						state.now = pending.due;
						trace!(key = key.as_str(), now = ?state.now, "Running task.");
						pending.task
					}
					None => {
						state.now = target;
						break;
					}
				}
			};
			task();
		}
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, key: String, delay: Duration, task: Task) {
		let mut state = self.state.borrow_mut();
		let pending = Pending {
			due: state.now + delay,
			sequence: state.next_sequence,
			task,
		};
		state.next_sequence += 1;
		debug!(key = key.as_str(), ?delay, "Scheduled task.");
		if state.pending.insert(key, pending).is_some() {
			debug!("Replaced pending task.");
		}
	}

	fn cancel(&self, key: &str) -> bool {
		let cancelled = self.state.borrow_mut().pending.remove(key).is_some();
		if cancelled {
			debug!(key, "Cancelled task.");
		}
		cancelled
	}
}

#[cfg(test)]
mod tests {
	use super::{ManualScheduler, Scheduler};
	use core::{cell::RefCell, time::Duration};
	use std::rc::Rc;

	fn log_task(log: &Rc<RefCell<Vec<&'static str>>>, entry: &'static str) -> super::Task {
		let log = Rc::clone(log);
		Box::new(move || log.borrow_mut().push(entry))
	}

	#[test]
	fn runs_in_due_order() {
		let scheduler = ManualScheduler::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		scheduler.schedule("b".to_owned(), Duration::from_millis(200), log_task(&log, "b"));
		scheduler.schedule("a".to_owned(), Duration::from_millis(150), log_task(&log, "a"));

		scheduler.advance(Duration::from_millis(149));
		assert!(log.borrow().is_empty());
		scheduler.advance(Duration::from_millis(1));
		assert_eq!(*log.borrow(), ["a"]);
		scheduler.advance(Duration::from_millis(100));
		assert_eq!(*log.borrow(), ["a", "b"]);
		assert_eq!(scheduler.now(), Duration::from_millis(250));
	}

	#[test]
	fn same_key_replaces() {
		let scheduler = ManualScheduler::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		scheduler.schedule("k".to_owned(), Duration::from_millis(10), log_task(&log, "first"));
		scheduler.schedule("k".to_owned(), Duration::from_millis(10), log_task(&log, "second"));
		assert_eq!(scheduler.pending(), 1);

		scheduler.advance(Duration::from_millis(10));
		assert_eq!(*log.borrow(), ["second"]);
	}

	#[test]
	fn cancel() {
		let scheduler = ManualScheduler::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		scheduler.schedule("k".to_owned(), Duration::from_millis(10), log_task(&log, "k"));
		assert!(scheduler.cancel("k"));
		assert!(!scheduler.cancel("k"));

		scheduler.advance(Duration::from_secs(1));
		assert!(log.borrow().is_empty());
	}

	#[test]
	fn tasks_can_schedule_tasks() {
		let scheduler = Rc::new(ManualScheduler::new());
		let log = Rc::new(RefCell::new(Vec::new()));
		{
			let inner_scheduler = Rc::clone(&scheduler);
			let inner = log_task(&log, "inner");
			scheduler.schedule(
				"outer".to_owned(),
				Duration::from_millis(5),
				Box::new(move || inner_scheduler.schedule("inner".to_owned(), Duration::from_millis(5), inner)),
			);
		}

		scheduler.advance(Duration::from_millis(10));
		assert_eq!(*log.borrow(), ["inner"]);
	}
}
