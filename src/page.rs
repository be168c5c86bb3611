use crate::{Config, LikeToggle, ReplyBoxToggle, ReplyVisibility, Scheduler, Transport, View};
use std::rc::Rc;

/// All controllers of one comment page, sharing a view and configuration.
pub struct Page<V, S, T> {
	pub replies: ReplyVisibility<V, S>,
	pub likes: LikeToggle<V, T>,
	pub reply_boxes: ReplyBoxToggle<V>,
}

impl<V, S, T> Page<V, S, T>
where
	V: View + 'static,
	S: Scheduler,
	T: Transport,
{
	#[must_use]
	pub fn new(view: Rc<V>, scheduler: Rc<S>, transport: Rc<T>, config: Config) -> Self {
		let config = Rc::new(config);
		Self {
			replies: ReplyVisibility::new(Rc::clone(&view), scheduler, Rc::clone(&config)),
			likes: LikeToggle::new(Rc::clone(&view), transport, Rc::clone(&config)),
			reply_boxes: ReplyBoxToggle::new(view, config),
		}
	}
}
