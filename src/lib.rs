//! Presentation logic for comment pages: collapsible reply threads, optimistic like counters and reply-box toggles.
//!
//! Everything that touches the page goes through a [`View`], deferred work goes through a [`Scheduler`]
//! and network calls go through a [`Transport`], so the controllers run unchanged against the browser
//! ([`DomView`], [`BrowserTimers`], [`ReqwestTransport`]) or headless ([`MemoryView`], [`ManualScheduler`]).

#![doc(html_root_url = "https://docs.rs/comment-thread-dom/0.1.0")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod color;
pub mod config;
pub mod dom;
pub mod error;
pub mod http;
pub mod ids;
pub mod like;
pub mod load;
pub mod memory;
pub mod page;
pub mod reply;
pub mod reply_box;
pub mod schedule;
pub mod timers;
pub mod view;

pub use {
	config::Config,
	dom::DomView,
	error::Error,
	http::{ReqwestTransport, Transport},
	like::{LikeState, LikeToggle},
	memory::MemoryView,
	page::Page,
	reply::{RepliesState, ReplyVisibility},
	reply_box::ReplyBoxToggle,
	schedule::{ManualScheduler, Scheduler},
	timers::BrowserTimers,
	view::View,
};
