use crate::Error;

/// Access to the presentation state of page elements, addressed by element id.
///
/// Setters take `&self`: the document is shared, and both the controllers and their
/// deferred continuations hold on to the same view.
pub trait View {
	fn contains(&self, id: &str) -> bool;

	/// # Errors
	///
	/// [`Error::MissingElement`] iff there is no element `id`.
	fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, Error>;

	/// The inline `color` style, as the view serialises it.
	///
	/// # Errors
	///
	/// Iff the element is missing or has no inline style.
	fn color(&self, id: &str) -> Result<String, Error>;
	/// # Errors
	///
	/// Iff the element is missing or has no inline style.
	fn set_color(&self, id: &str, color: &str) -> Result<(), Error>;

	/// # Errors
	///
	/// [`Error::MissingElement`] iff there is no element `id`.
	fn class_name(&self, id: &str) -> Result<String, Error>;
	/// # Errors
	///
	/// [`Error::MissingElement`] iff there is no element `id`.
	fn set_class_name(&self, id: &str, class_name: &str) -> Result<(), Error>;

	/// # Errors
	///
	/// [`Error::MissingElement`] iff there is no element `id`.
	fn text(&self, id: &str) -> Result<String, Error>;
	/// # Errors
	///
	/// [`Error::MissingElement`] iff there is no element `id`.
	fn set_text(&self, id: &str, text: &str) -> Result<(), Error>;

	/// The inline `display` style, empty if unset.
	///
	/// # Errors
	///
	/// Iff the element is missing or has no inline style.
	fn display(&self, id: &str) -> Result<String, Error>;
	/// # Errors
	///
	/// Iff the element is missing or has no inline style.
	fn set_display(&self, id: &str, display: &str) -> Result<(), Error>;

	/// Fails with the first of `ids` that isn't present.
	///
	/// # Errors
	///
	/// [`Error::MissingElement`] for the first missing id.
	fn require<I, S>(&self, ids: I) -> Result<(), Error>
	where
		Self: Sized,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		ids.into_iter()
			.find(|id| !self.contains(id.as_ref()))
			.map_or(Ok(()), |id| Err(Error::missing(id.as_ref())))
	}
}
