//! An in-memory [`View`], for running the controllers without a browser.

use crate::{Error, View};
use core::cell::RefCell;
use hashbrown::HashMap;

/// Presentation state of a single element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
	pub color: String,
	pub class_name: String,
	pub text: String,
	pub display: String,
	pub attributes: HashMap<String, String>,
}

impl ElementState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_color(mut self, color: &str) -> Self {
		self.color = color.to_owned();
		self
	}

	#[must_use]
	pub fn with_class(mut self, class_name: &str) -> Self {
		self.class_name = class_name.to_owned();
		self
	}

	#[must_use]
	pub fn with_text(mut self, text: &str) -> Self {
		self.text = text.to_owned();
		self
	}

	#[must_use]
	pub fn with_display(mut self, display: &str) -> Self {
		self.display = display.to_owned();
		self
	}

	#[must_use]
	pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
		self.attributes.insert(name.to_owned(), value.to_owned());
		self
	}
}

/// Elements keyed by id. Values are stored verbatim, without CSS serialisation.
#[derive(Debug, Default)]
pub struct MemoryView {
	elements: RefCell<HashMap<String, ElementState>>,
}

impl MemoryView {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an element.
	pub fn insert(&self, id: impl Into<String>, element: ElementState) {
		self.elements.borrow_mut().insert(id.into(), element);
	}

	pub fn remove(&self, id: &str) -> Option<ElementState> {
		self.elements.borrow_mut().remove(id)
	}

	/// A snapshot of an element's current state.
	#[must_use]
	pub fn get(&self, id: &str) -> Option<ElementState> {
		self.elements.borrow().get(id).cloned()
	}

	fn read<T>(&self, id: &str, f: impl FnOnce(&ElementState) -> T) -> Result<T, Error> {
		self.elements.borrow().get(id).map(f).ok_or_else(|| Error::missing(id))
	}

	fn write(&self, id: &str, f: impl FnOnce(&mut ElementState)) -> Result<(), Error> {
		self.elements.borrow_mut().get_mut(id).map(f).ok_or_else(|| Error::missing(id))
	}
}

impl View for MemoryView {
	fn contains(&self, id: &str) -> bool {
		self.elements.borrow().contains_key(id)
	}

	fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, Error> {
		self.read(id, |element| element.attributes.get(name).cloned())
	}

	fn color(&self, id: &str) -> Result<String, Error> {
		self.read(id, |element| element.color.clone())
	}

	fn set_color(&self, id: &str, color: &str) -> Result<(), Error> {
		self.write(id, |element| element.color = color.to_owned())
	}

	fn class_name(&self, id: &str) -> Result<String, Error> {
		self.read(id, |element| element.class_name.clone())
	}

	fn set_class_name(&self, id: &str, class_name: &str) -> Result<(), Error> {
		self.write(id, |element| element.class_name = class_name.to_owned())
	}

	fn text(&self, id: &str) -> Result<String, Error> {
		self.read(id, |element| element.text.clone())
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), Error> {
		self.write(id, |element| element.text = text.to_owned())
	}

	fn display(&self, id: &str) -> Result<String, Error> {
		self.read(id, |element| element.display.clone())
	}

	fn set_display(&self, id: &str, display: &str) -> Result<(), Error> {
		self.write(id, |element| element.display = display.to_owned())
	}
}
