//! Optimistic like/unlike buttons with server reconciliation.

use crate::{
	http::{Response, Transport},
	ids, Config, Error, View,
};
use core::cell::RefCell;
use hashbrown::HashMap;
use serde::Deserialize;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeState {
	Liked,
	NotLiked,
}

/// Reads the count out of a `+ N likes` counter.
///
/// Only the second space-separated token is inspected, so the suffix isn't checked.
///
/// # Errors
///
/// [`Error::MalformedCounter`] iff that token isn't a non-negative integer.
pub fn parse_like_count(counter_id: &str, text: &str) -> Result<u32, Error> {
	text.split(' ')
		.nth(1)
		.and_then(|count| count.parse().ok())
		.ok_or_else(|| Error::MalformedCounter {
			id: counter_id.to_owned(),
			text: text.to_owned(),
		})
}

#[must_use]
pub fn format_like_count(count: u32) -> String {
	format!("+ {} likes", count)
}

/// Server answer that carries the authoritative count. Anything else is ignored.
#[derive(Deserialize)]
struct LikeCount {
	likes: u32,
}

/// What a toggle overwrote, for rolling back.
struct Snapshot {
	class_name: String,
	color: String,
	counter_text: String,
}

/// Toggles like buttons, updating the page before the server confirms.
///
/// Each toggle issues a GET to the like or unlike endpoint.
/// A failed request or non-success status rolls the button and counter back;
/// a success body of the form `{"likes": N}` replaces the local count.
/// Completions that arrive after a newer toggle of the same comment are dropped.
pub struct LikeToggle<V, T> {
	view: Rc<V>,
	transport: Rc<T>,
	config: Rc<Config>,
	generations: Rc<RefCell<HashMap<String, u64>>>,
}

impl<V, T> LikeToggle<V, T>
where
	V: View + 'static,
	T: Transport,
{
	#[must_use]
	pub fn new(view: Rc<V>, transport: Rc<T>, config: Rc<Config>) -> Self {
		Self {
			view,
			transport,
			config,
			generations: Rc::default(),
		}
	}

	/// # Errors
	///
	/// Iff the button or counter is missing, or the counter is malformed or would overflow `u32`.
	/// Nothing is changed or sent in that case.
	///
	/// Unliking at `+ 0 likes` still sends the request. The displayed count stays at 0.
	#[instrument(skip(self))]
	pub fn toggle_like(&self, comment_id: &str) -> Result<LikeState, Error> {
		let button = ids::button_marker(comment_id);
		let counter = ids::like_counter(comment_id);

		let snapshot = Snapshot {
			class_name: self.view.class_name(&button)?,
			color: self.view.color(&button)?,
			counter_text: self.view.text(&counter)?,
		};
		let count = parse_like_count(&counter, &snapshot.counter_text)?;

		let (state, path, next) = if snapshot.class_name == self.config.unliked_class {
			(LikeState::Liked, ids::like_path(comment_id), count.checked_add(1))
		} else {
			(LikeState::NotLiked, ids::unlike_path(comment_id), Some(count.saturating_sub(1)))
		};
		let next = next.ok_or_else(|| Error::CounterOutOfRange { id: counter.clone(), count })?;

		let (class_name, color) = match state {
			LikeState::Liked => (&self.config.liked_class, &self.config.accent_color),
			LikeState::NotLiked => (&self.config.unliked_class, &self.config.base_color),
		};
		self.view.set_class_name(&button, class_name)?;
		self.view.set_color(&button, color)?;
		self.view.set_text(&counter, &format_like_count(next))?;

		let generation = {
			let mut generations = self.generations.borrow_mut();
			let generation = generations.entry(comment_id.to_owned()).or_insert(0);
			*generation += 1;
			*generation
		};

		let reconcile = Reconcile {
			view: Rc::clone(&self.view),
			generations: Rc::clone(&self.generations),
			comment_id: comment_id.to_owned(),
			generation,
			button,
			counter,
			snapshot,
		};
		let completion_path = path.clone();
		self.transport.get(
			&path,
			Box::new(move |result| reconcile.complete(&completion_path, result)),
		);
		Ok(state)
	}
}

struct Reconcile<V> {
	view: Rc<V>,
	generations: Rc<RefCell<HashMap<String, u64>>>,
	comment_id: String,
	generation: u64,
	button: String,
	counter: String,
	snapshot: Snapshot,
}

impl<V: View> Reconcile<V> {
	fn complete(self, path: &str, result: Result<Response, Error>) {
		let latest = self.generations.borrow().get(&self.comment_id).copied();
		if latest != Some(self.generation) {
			return debug!(path, "Dropping superseded response.");
		}

		let result = result.and_then(|response| {
			if response.is_success() {
				Ok(response)
			} else {
				Err(Error::Status {
					path: path.to_owned(),
					status: response.status,
				})
			}
		});
		let outcome = match result {
			Ok(response) => match serde_json::from_str::<LikeCount>(&response.body) {
				Ok(LikeCount { likes }) => {
					debug!(path, likes, "Adopting server count.");
					self.view.set_text(&self.counter, &format_like_count(likes))
				}
				Err(_) => Ok(()),
			},
			Err(error) => {
				warn!(%error, "Rolling back like toggle.");
				self.roll_back()
			}
		};
		if let Err(error) = outcome {
			warn!(%error, "Couldn't reconcile like button.");
		}
	}

	fn roll_back(&self) -> Result<(), Error> {
		self.view.set_class_name(&self.button, &self.snapshot.class_name)?;
		self.view.set_color(&self.button, &self.snapshot.color)?;
		self.view.set_text(&self.counter, &self.snapshot.counter_text)
	}
}
