//! The reply-visibility cascade: one toggle control expands or collapses its direct replies.

use crate::{color::same_color, ids, load, Config, Error, Scheduler, View};
use core::cell::RefCell;
use hashbrown::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// Which way a thread toggle went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepliesState {
	Expanded,
	Collapsed,
}

/// Expands and collapses reply threads.
///
/// A thread toggle showing the accent colour marks a collapsed thread.
/// Delayed steps are scheduled under the id of the element they touch,
/// so re-toggling mid-transition cancels the stale step instead of racing it.
pub struct ReplyVisibility<V, S> {
	view: Rc<V>,
	scheduler: Rc<S>,
	config: Rc<Config>,
	threads: RefCell<HashMap<String, Vec<String>>>,
}

impl<V, S> ReplyVisibility<V, S>
where
	V: View + 'static,
	S: Scheduler,
{
	#[must_use]
	pub fn new(view: Rc<V>, scheduler: Rc<S>, config: Rc<Config>) -> Self {
		Self {
			view,
			scheduler,
			config,
			threads: RefCell::default(),
		}
	}

	/// Registers `parent_id`'s direct replies, taking precedence over the toggle's `value` attribute.
	pub fn register_thread(&self, parent_id: impl Into<String>, children: Vec<String>) {
		self.threads.borrow_mut().insert(parent_id.into(), children);
	}

	/// The direct replies of `parent_id`, from the registry or else from the page.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] iff nothing is registered and the thread toggle is missing.
	pub fn children(&self, parent_id: &str) -> Result<Vec<String>, Error> {
		match self.threads.borrow().get(parent_id) {
			Some(children) => Ok(children.clone()),
			None => load::load_children(&*self.view, parent_id),
		}
	}

	/// The state `parent_id`'s thread is currently displayed in.
	///
	/// # Errors
	///
	/// Iff the thread toggle is missing or has no inline style.
	pub fn state(&self, parent_id: &str) -> Result<RepliesState, Error> {
		let color = self.view.color(&ids::hide_reply(parent_id))?;
		Ok(if same_color(&color, &self.config.accent_color) {
			RepliesState::Collapsed
		} else {
			RepliesState::Expanded
		})
	}

	/// Flips `parent_id`'s thread and returns the state it's now in.
	///
	/// Every element the flip touches is checked first; nothing is changed if any is missing.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] if the thread's toggle or label,
	/// or any element of a reply that would be touched, doesn't exist.
	#[instrument(skip(self))]
	pub fn toggle_replies(&self, parent_id: &str) -> Result<RepliesState, Error> {
		let toggle = ids::hide_reply(parent_id);
		let label = ids::reply_text(parent_id);
		self.view.require([&toggle, &label])?;
		let children = self.children(parent_id)?;

		match self.state(parent_id)? {
			RepliesState::Collapsed => {
				for child in &children {
					self.view.require([ids::hide_reply(child), ids::reply_text(child), ids::visibility_tag(child)])?;
				}
				self.expand(parent_id)?;
				for child in &children {
					self.set_visibility_on(child)?;
				}
				Ok(RepliesState::Expanded)
			}
			RepliesState::Expanded => {
				self.view.require(children.iter().map(|child| ids::visibility_tag(child)))?;
				self.view.set_color(&toggle, &self.config.accent_color)?;
				for child in &children {
					self.set_visibility_off(child)?;
				}
				self.schedule_collapsed_label(parent_id);
				Ok(RepliesState::Collapsed)
			}
		}
	}

	/// Forces `child_id`'s reply visible and its own thread toggle to the expanded look, immediately.
	///
	/// Pending delayed steps for the reply are cancelled.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] iff the reply's toggle, label or visibility wrapper doesn't exist.
	#[instrument(skip(self))]
	pub fn set_visibility_on(&self, child_id: &str) -> Result<(), Error> {
		let wrapper = ids::visibility_tag(child_id);
		self.view.require([&wrapper])?;
		self.expand(child_id)?;

		self.scheduler.cancel(&wrapper);
		self.view.set_display(&wrapper, "block")?;
		self.view.set_class_name(&wrapper, &self.config.visible_class)
	}

	/// Starts hiding `child_id`'s reply: the `hidden` class now, `display: none` once the transition has played.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] iff the reply's visibility wrapper doesn't exist.
	#[instrument(skip(self))]
	pub fn set_visibility_off(&self, child_id: &str) -> Result<(), Error> {
		let wrapper = ids::visibility_tag(child_id);
		self.view.set_class_name(&wrapper, &self.config.hidden_class)?;

		let view = Rc::clone(&self.view);
		let key = wrapper.clone();
		self.scheduler.schedule(
			key,
			self.config.display_delay(),
			Box::new(move || {
				if let Err(error) = view.set_display(&wrapper, "none") {
					warn!(%error, "Couldn't finish hiding reply.");
				}
			}),
		);
		Ok(())
	}

	/// Gives `id`'s thread toggle and label the expanded look.
	fn expand(&self, id: &str) -> Result<(), Error> {
		let toggle = ids::hide_reply(id);
		let label = ids::reply_text(id);
		self.view.require([&toggle, &label])?;

		if self.scheduler.cancel(&label) {
			debug!(id, "Cancelled pending label flip.");
		}
		self.view.set_color(&toggle, &self.config.base_color)?;
		self.view.set_class_name(&toggle, &self.config.expanded_icon)?;
		self.view.set_text(&label, &self.config.hide_label)
	}

	fn schedule_collapsed_label(&self, parent_id: &str) {
		let toggle = ids::hide_reply(parent_id);
		let label = ids::reply_text(parent_id);
		let view = Rc::clone(&self.view);
		let config = Rc::clone(&self.config);
		self.scheduler.schedule(
			label.clone(),
			config.label_delay(),
			Box::new(move || {
				let result = view
					.set_text(&label, &config.show_label)
					.and_then(|()| view.set_class_name(&toggle, &config.collapsed_icon));
				if let Err(error) = result {
					warn!(%error, "Couldn't flip collapsed thread label.");
				}
			}),
		);
	}
}
