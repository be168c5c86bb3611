use crate::{ids, Config, Error, View};
use std::rc::Rc;
use tracing::instrument;

/// Shows and hides the reply form under a comment, highlighting its trigger button while open.
pub struct ReplyBoxToggle<V> {
	view: Rc<V>,
	config: Rc<Config>,
}

impl<V: View> ReplyBoxToggle<V> {
	#[must_use]
	pub fn new(view: Rc<V>, config: Rc<Config>) -> Self {
		Self { view, config }
	}

	/// Opens the reply box `id` iff it is currently `display: none`, closes it otherwise.
	/// Returns whether it is now open.
	///
	/// An unset display counts as open, so a box must be rendered with an explicit `display: none` to start closed.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] iff the box or its `reply_button` trigger doesn't exist.
	#[instrument(skip(self))]
	pub fn toggle_reply_box(&self, id: &str) -> Result<bool, Error> {
		let trigger = ids::reply_button(id);
		self.view.require([id, trigger.as_str()])?;

		let open = self.view.display(id)? == "none";
		let (display, color) = if open {
			("block", &self.config.accent_color)
		} else {
			("none", &self.config.base_color)
		};
		self.view.set_display(id, display)?;
		self.view.set_color(&trigger, color)?;
		Ok(open)
	}
}
