use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
	#[error("no element with id `{id}`")]
	MissingElement { id: String },

	/// The element exists but is neither an [***HTMLElement***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement)
	/// nor an [***SVGElement***](https://developer.mozilla.org/en-US/docs/Web/API/SVGElement), so it has no inline style.
	#[error("element `{id}` has no inline style")]
	NotStylable { id: String },

	#[error("like counter `{id}` doesn't read `+ N likes`: {text:?}")]
	MalformedCounter { id: String, text: String },

	#[error("like counter `{id}` can't go from {count} in that direction")]
	CounterOutOfRange { id: String, count: u32 },

	#[error("no browser window available")]
	NoWindow,

	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),

	#[error("request to `{path}` failed: {reason}")]
	Request { path: String, reason: String },

	#[error("request to `{path}` returned HTTP {status}")]
	Status { path: String, status: u16 },

	#[error("JavaScript exception: {0}")]
	Js(String),

	/// `initCommentPage` ran after the page controllers already existed.
	#[error("comment page already initialised")]
	AlreadyInitialized,
}

impl Error {
	pub(crate) fn missing(id: &str) -> Self {
		Self::MissingElement { id: id.to_owned() }
	}

	#[allow(clippy::needless_pass_by_value)]
	pub(crate) fn from_js(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

impl From<Error> for JsValue {
	fn from(error: Error) -> Self {
		JsValue::from_str(&error.to_string())
	}
}
