use crate::{Error, View};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

/// A [`View`] over a live [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document).
///
/// Colour and display are read from and written to each element's inline
/// [***style***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement/style),
/// so reads return the browser's serialisation (`#F2A900` reads back as `rgb(242, 169, 0)`).
/// Text is accessed through [***textContent***](https://developer.mozilla.org/en-US/docs/Web/API/Node/textContent).
#[derive(Debug, Clone)]
pub struct DomView {
	document: Document,
}

impl DomView {
	#[must_use]
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// # Errors
	///
	/// [`Error::NoWindow`] outside of a browser main thread or if the window has no document.
	#[instrument]
	pub fn from_window() -> Result<Self, Error> {
		let document = web_sys::window().and_then(|window| window.document()).ok_or(Error::NoWindow)?;
		Ok(Self::new(document))
	}

	fn element(&self, id: &str) -> Result<Element, Error> {
		self.document.get_element_by_id(id).ok_or_else(|| Error::missing(id))
	}

	/// Icons may have been swapped for inline `<svg>`, which carries its own inline style.
	fn style(&self, id: &str) -> Result<CssStyleDeclaration, Error> {
		let element = self.element(id)?;
		if let Some(element) = element.dyn_ref::<HtmlElement>() {
			Ok(element.style())
		} else if let Some(element) = element.dyn_ref::<SvgElement>() {
			Ok(element.style())
		} else {
			Err(Error::NotStylable { id: id.to_owned() })
		}
	}

	fn set_style(&self, id: &str, property: &str, value: &str) -> Result<(), Error> {
		trace!(id, property, value, "Setting style.");
		self.style(id)?.set_property(property, value).map_err(Error::from_js)
	}
}

impl View for DomView {
	fn contains(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, Error> {
		Ok(self.element(id)?.get_attribute(name))
	}

	fn color(&self, id: &str) -> Result<String, Error> {
		self.style(id)?.get_property_value("color").map_err(Error::from_js)
	}

	fn set_color(&self, id: &str, color: &str) -> Result<(), Error> {
		self.set_style(id, "color", color)
	}

	fn class_name(&self, id: &str) -> Result<String, Error> {
		Ok(self.element(id)?.class_name())
	}

	fn set_class_name(&self, id: &str, class_name: &str) -> Result<(), Error> {
		trace!(id, class_name, "Setting class.");
		self.element(id)?.set_class_name(class_name);
		Ok(())
	}

	fn text(&self, id: &str) -> Result<String, Error> {
		Ok(self.element(id)?.text_content().unwrap_or_default())
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), Error> {
		trace!(id, text, "Setting text.");
		self.element(id)?.set_text_content(Some(text));
		Ok(())
	}

	fn display(&self, id: &str) -> Result<String, Error> {
		self.style(id)?.get_property_value("display").map_err(Error::from_js)
	}

	fn set_display(&self, id: &str, display: &str) -> Result<(), Error> {
		self.set_style(id, "display", display)
	}
}
