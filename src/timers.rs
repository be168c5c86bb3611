use crate::{
	schedule::{Scheduler, Task},
	Error,
};
use core::{cell::RefCell, time::Duration};
use hashbrown::HashMap;
use js_sys::Function;
use std::rc::{Rc, Weak};
use tracing::{debug, error, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast};

struct Timer {
	handle: i32,
	_callback: Closure<dyn FnMut()>,
}

type TimerMap = RefCell<HashMap<String, Timer>>;

/// A [`Scheduler`] backed by [***setTimeout***](https://developer.mozilla.org/en-US/docs/Web/API/setTimeout).
///
/// Each pending timer's [`Closure`] is kept alive here until it fires or is cancelled.
/// Dropping the `BrowserTimers` clears all pending timeouts.
pub struct BrowserTimers {
	window: web_sys::Window,
	timers: Rc<TimerMap>,
}

impl BrowserTimers {
	/// # Errors
	///
	/// [`Error::NoWindow`] outside of a browser main thread.
	#[instrument]
	pub fn new() -> Result<Self, Error> {
		Ok(Self {
			window: web_sys::window().ok_or(Error::NoWindow)?,
			timers: Rc::default(),
		})
	}

	fn fire(timers: &Weak<TimerMap>, key: &str, task: Option<Task>) {
		if let Some(timers) = timers.upgrade() {
			// Drops the running closure. wasm-bindgen defers freeing it until it returns.
			timers.borrow_mut().remove(key);
		}
		match task {
			Some(task) => {
				trace!(key, "Timer fired.");
				task();
			}
			None => error!(key, "Timer fired twice."),
		}
	}
}

impl Scheduler for BrowserTimers {
	#[instrument(skip(self, task))]
	fn schedule(&self, key: String, delay: Duration, task: Task) {
		self.cancel(&key);

		let callback = {
			let timers = Rc::downgrade(&self.timers);
			let key = key.clone();
			let mut task = Some(task);
			Closure::wrap(Box::new(move || Self::fire(&timers, &key, task.take())) as Box<dyn FnMut()>)
		};

		let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
		match self
			.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref::<Function>(), timeout)
		{
			Ok(handle) => {
				debug!(handle, "Scheduled timer.");
				self.timers.borrow_mut().insert(key, Timer { handle, _callback: callback });
			}
			Err(error) => error!(?error, "Failed to schedule timer."),
		}
	}

	fn cancel(&self, key: &str) -> bool {
		let timer = self.timers.borrow_mut().remove(key);
		match timer {
			Some(timer) => {
				self.window.clear_timeout_with_handle(timer.handle);
				debug!(key, handle = timer.handle, "Cancelled timer.");
				true
			}
			None => false,
		}
	}
}

impl Drop for BrowserTimers {
	fn drop(&mut self) {
		for (_, timer) in self.timers.borrow_mut().drain() {
			self.window.clear_timeout_with_handle(timer.handle);
		}
	}
}
