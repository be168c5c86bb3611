//! JavaScript entry points, called from the page's markup.
//!
//! Ids are accepted as strings or as integral numbers, since templates often render them unquoted.

use crate::{ids, BrowserTimers, Config, DomView, Error, Page, ReqwestTransport};
use core::cell::RefCell;
use js_sys::Array;
use std::{rc::Rc, sync::Once};
use tracing::info;
use wasm_bindgen::prelude::*;

type BrowserPage = Page<DomView, BrowserTimers, ReqwestTransport>;

thread_local! {
	static PAGE: RefCell<Option<Rc<BrowserPage>>> = RefCell::new(None);
}

static LOG_INITIALIZED: Once = Once::new();

fn create(config: Config) -> Result<BrowserPage, Error> {
	let transport = match &config.base_url {
		Some(base_url) => ReqwestTransport::new(base_url.as_str()),
		None => ReqwestTransport::from_location()?,
	};
	Ok(Page::new(
		Rc::new(DomView::from_window()?),
		Rc::new(BrowserTimers::new()?),
		Rc::new(transport),
		config,
	))
}

fn element_id(value: &JsValue) -> Result<String, Error> {
	value
		.as_string()
		.or_else(|| value.as_f64().and_then(ids::from_number))
		.ok_or_else(|| Error::Js(format!("expected a string or integer id, got {:?}", value)))
}

fn with_page<R>(f: impl FnOnce(&BrowserPage) -> Result<R, Error>) -> Result<R, JsValue> {
	let page = PAGE.with(|page| page.borrow().clone());
	let page = match page {
		Some(page) => page,
		None => {
			init(None)?;
			PAGE.with(|page| page.borrow().clone()).ok_or_else(|| JsValue::from_str("page not initialised"))?
		}
	};
	Ok(f(&page)?)
}

/// Sets up logging and the page controllers. Optional: the first call to any other entry point does this with defaults.
///
/// `config` is a JSON object overriding individual [`Config`] fields.
///
/// # Errors
///
/// [`Error::AlreadyInitialized`] once the controllers exist, including after the implicit setup.
/// The existing page, its registered threads and its pending transition steps are kept.
#[wasm_bindgen(js_name = initCommentPage)]
pub fn init(config: Option<String>) -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);

	if PAGE.with(|page| page.borrow().is_some()) {
		return Err(Error::AlreadyInitialized.into());
	}
	let config = match config {
		Some(json) => Config::from_json(&json)?,
		None => Config::default(),
	};
	let page = create(config)?;
	PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::new(page)));
	info!("Comment page controllers ready.");
	Ok(())
}

#[wasm_bindgen(js_name = handleReplyVisibility)]
pub fn handle_reply_visibility(parent_id: &JsValue) -> Result<(), JsValue> {
	let parent_id = element_id(parent_id)?;
	with_page(|page| page.replies.toggle_replies(&parent_id).map(drop))
}

/// Registers `parent_id`'s direct replies explicitly, instead of reading its toggle's `value` attribute.
///
/// # Errors
///
/// [`Error::Js`] if `parent_id` or any of `children` is neither a string nor an integer. Nothing is registered then.
#[wasm_bindgen(js_name = registerReplyThread)]
pub fn register_reply_thread(parent_id: &JsValue, children: &Array) -> Result<(), JsValue> {
	let parent_id = element_id(parent_id)?;
	let children = children.iter().map(|child| element_id(&child)).collect::<Result<Vec<_>, _>>()?;
	with_page(|page| {
		page.replies.register_thread(parent_id, children);
		Ok(())
	})
}

#[wasm_bindgen(js_name = toggleLike)]
pub fn toggle_like(comment_id: &JsValue) -> Result<(), JsValue> {
	let comment_id = element_id(comment_id)?;
	with_page(|page| page.likes.toggle_like(&comment_id).map(drop))
}

#[wasm_bindgen(js_name = showReplyBox)]
pub fn show_reply_box(id: &JsValue) -> Result<(), JsValue> {
	let id = element_id(id)?;
	with_page(|page| page.reply_boxes.toggle_reply_box(&id).map(drop))
}
