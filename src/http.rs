use crate::Error;
use tracing::{debug, instrument};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
	pub status: u16,
	pub body: String,
}

impl Response {
	#[must_use]
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

pub type Completion = Box<dyn FnOnce(Result<Response, Error>)>;

/// Issues background GET requests to the page's server.
///
/// `path` is origin-relative. `on_complete` is called exactly once, on the UI thread.
pub trait Transport {
	fn get(&self, path: &str, on_complete: Completion);
}

/// A [`Transport`] over [`reqwest`], which uses `fetch` when compiled to Wasm.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
	client: reqwest::Client,
	origin: String,
}

impl ReqwestTransport {
	#[must_use]
	pub fn new(origin: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			origin: origin.into().trim_end_matches('/').to_owned(),
		}
	}

	/// Targets the origin of the current page.
	///
	/// # Errors
	///
	/// [`Error::NoWindow`] outside of a browser main thread,
	/// [`Error::Js`] if the location can't be read.
	#[instrument]
	pub fn from_location() -> Result<Self, Error> {
		let origin = web_sys::window().ok_or(Error::NoWindow)?.location().origin().map_err(Error::from_js)?;
		Ok(Self::new(origin))
	}

	#[must_use]
	pub fn origin(&self) -> &str {
		&self.origin
	}
}

impl Transport for ReqwestTransport {
	#[instrument(skip(self, on_complete))]
	fn get(&self, path: &str, on_complete: Completion) {
		let url = format!("{}{}", self.origin, path);
		let request = self.client.get(&url);
		spawn_local(async move {
			let result = fetch(request, &url).await;
			debug!(url = url.as_str(), ok = result.is_ok(), "Request completed.");
			on_complete(result);
		});
	}
}

async fn fetch(request: reqwest::RequestBuilder, url: &str) -> Result<Response, Error> {
	let failed = |error: reqwest::Error| Error::Request {
		path: url.to_owned(),
		reason: error.to_string(),
	};
	let response = request.send().await.map_err(failed)?;
	let status = response.status().as_u16();
	let body = response.text().await.map_err(failed)?;
	Ok(Response { status, body })
}

#[cfg(test)]
mod tests {
	use super::Response;

	#[test]
	fn success_range() {
		let response = |status| Response { status, body: String::new() };
		assert!(response(200).is_success());
		assert!(response(204).is_success());
		assert!(!response(302).is_success());
		assert!(!response(500).is_success());
	}
}
