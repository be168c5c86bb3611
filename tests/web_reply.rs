#![cfg(target_arch = "wasm32")]

use comment_thread_dom::{BrowserTimers, Config, DomView, Error, RepliesState, ReplyVisibility, Scheduler, View};
use core::{cell::Cell, time::Duration};
use js_sys::Promise;
use std::{rc::Rc, sync::Once};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

static LOG_INITIALIZED: Once = Once::new();

fn append(id: &str, tag: &str) -> HtmlElement {
	LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);

	let document = window().unwrap().document().unwrap();
	let element: HtmlElement = document.create_element(tag).unwrap().dyn_into().unwrap();
	element.set_id(id);
	document.body().unwrap().append_child(&element).unwrap();
	element
}

/// Renders comment `id` with a single reply `child`.
fn thread(id: &str, child: &str, color: &str, display: &str) -> (HtmlElement, HtmlElement) {
	let toggle = append(&format!("hide_reply{}", id), "i");
	toggle.set_attribute("value", &format!("{};", child)).unwrap();
	toggle.style().set_property("color", color).unwrap();
	append(&format!("reply_text{}", id), "span");
	append(&format!("hide_reply{}", child), "i");
	append(&format!("reply_text{}", child), "span");
	let wrapper = append(&format!("visibility_tag_{}", child), "div");
	wrapper.style().set_property("display", display).unwrap();
	(toggle, wrapper)
}

fn text(id: &str) -> String {
	window().unwrap().document().unwrap().get_element_by_id(id).unwrap().text_content().unwrap()
}

/// Resolves after `ms` milliseconds of real time.
async fn sleep(ms: i32) {
	let promise = Promise::new(&mut |resolve, _reject| {
		window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn replies() -> ReplyVisibility<DomView, BrowserTimers> {
	ReplyVisibility::new(
		Rc::new(DomView::from_window().unwrap()),
		Rc::new(BrowserTimers::new().unwrap()),
		Rc::new(Config::default()),
	)
}

#[wasm_bindgen_test]
fn accent_colour_reads_back_serialised() {
	let (toggle, wrapper) = thread("w1", "w2", "#F2A900", "none");
	let replies = replies();

	assert_eq!(toggle.style().get_property_value("color").unwrap(), "rgb(242, 169, 0)");
	assert_eq!(replies.state("w1").unwrap(), RepliesState::Collapsed);

	assert_eq!(replies.toggle_replies("w1").unwrap(), RepliesState::Expanded);
	assert_eq!(toggle.class_name(), "icon solid fa-eye");
	assert_eq!(wrapper.class_name(), "visible");
	assert_eq!(wrapper.style().get_property_value("display").unwrap(), "block");
	assert_eq!(window().unwrap().document().unwrap().get_element_by_id("reply_textw1").unwrap().text_content().unwrap(), "Hide Replies");
}

#[wasm_bindgen_test]
fn collapse_keeps_layout_until_the_delay() {
	let (toggle, wrapper) = thread("w3", "w4", "white", "block");
	let replies = replies();

	assert_eq!(replies.toggle_replies("w3").unwrap(), RepliesState::Collapsed);
	assert_eq!(toggle.style().get_property_value("color").unwrap(), "rgb(242, 169, 0)");
	assert_eq!(wrapper.class_name(), "hidden");
	assert_eq!(wrapper.style().get_property_value("display").unwrap(), "block");
}

#[wasm_bindgen_test]
fn missing_element() {
	let view = DomView::from_window().unwrap();
	assert!(!view.contains("no-such-element"));
	assert!(matches!(view.color("no-such-element"), Err(Error::MissingElement { .. })));
}

#[wasm_bindgen_test]
async fn collapse_steps_fire_after_their_delays() {
	let (toggle, wrapper) = thread("w5", "w6", "white", "block");
	let replies = replies();

	assert_eq!(replies.toggle_replies("w5").unwrap(), RepliesState::Collapsed);
	assert_eq!(text("reply_textw5"), "");

	sleep(175).await;
	assert_eq!(text("reply_textw5"), "Show Replies");
	assert_eq!(toggle.class_name(), "icon solid fa-eye-slash");

	sleep(75).await;
	assert_eq!(wrapper.class_name(), "hidden");
	assert_eq!(wrapper.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
async fn reexpanding_cancels_the_pending_hide() {
	let (toggle, wrapper) = thread("w7", "w8", "white", "block");
	let replies = replies();

	assert_eq!(replies.toggle_replies("w7").unwrap(), RepliesState::Collapsed);
	sleep(100).await;
	assert_eq!(wrapper.style().get_property_value("display").unwrap(), "block");
	assert_eq!(replies.toggle_replies("w7").unwrap(), RepliesState::Expanded);

	sleep(300).await;
	assert_eq!(wrapper.class_name(), "visible");
	assert_eq!(wrapper.style().get_property_value("display").unwrap(), "block");
	assert_eq!(text("reply_textw7"), "Hide Replies");
	assert_eq!(toggle.class_name(), "icon solid fa-eye");
}

#[wasm_bindgen_test]
async fn cancelled_and_dropped_timers_stay_silent() {
	let fired = Rc::new(Cell::new(0));
	let timers = BrowserTimers::new().unwrap();

	let count = |fired: &Rc<Cell<i32>>| {
		let fired = Rc::clone(fired);
		Box::new(move || fired.set(fired.get() + 1))
	};
	timers.schedule("kept".to_owned(), Duration::from_millis(10), count(&fired));
	timers.schedule("cancelled".to_owned(), Duration::from_millis(10), count(&fired));
	assert!(timers.cancel("cancelled"));
	assert!(!timers.cancel("cancelled"));

	sleep(50).await;
	assert_eq!(fired.get(), 1);
	assert!(!timers.cancel("kept"));

	timers.schedule("dropped".to_owned(), Duration::from_millis(10), count(&fired));
	drop(timers);
	sleep(50).await;
	assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn svg_icons_are_stylable() {
	let document = window().unwrap().document().unwrap();
	let icon = document.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg").unwrap();
	icon.set_id("svg-icon");
	document.body().unwrap().append_child(&icon).unwrap();

	let view = DomView::from_window().unwrap();
	view.set_color("svg-icon", "#F2A900").unwrap();
	assert_eq!(view.color("svg-icon").unwrap(), "rgb(242, 169, 0)");
	view.set_display("svg-icon", "none").unwrap();
	assert_eq!(view.display("svg-icon").unwrap(), "none");
}

#[wasm_bindgen_test]
fn unstyled_elements_are_reported() {
	let document = window().unwrap().document().unwrap();
	let node = document.create_element_ns(Some("urn:comment-thread-dom:test"), "node").unwrap();
	node.set_id("foreign-node");
	document.body().unwrap().append_child(&node).unwrap();

	let view = DomView::from_window().unwrap();
	match view.color("foreign-node") {
		Err(Error::NotStylable { id }) => assert_eq!(id, "foreign-node"),
		other => panic!("Expected an unstylable element, got {:?}", other),
	}
}
