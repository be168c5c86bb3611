//! Element ids and endpoint paths as rendered by the page templates.
//!
//! These are plain string concatenations and must stay bit-exact with the markup.

#[must_use]
pub fn hide_reply(id: &str) -> String {
	format!("hide_reply{}", id)
}

#[must_use]
pub fn reply_text(id: &str) -> String {
	format!("reply_text{}", id)
}

#[must_use]
pub fn visibility_tag(id: &str) -> String {
	format!("visibility_tag_{}", id)
}

#[must_use]
pub fn button_marker(id: &str) -> String {
	format!("button_marker{}", id)
}

#[must_use]
pub fn like_counter(id: &str) -> String {
	format!("like_counter{}", id)
}

#[must_use]
pub fn reply_button(id: &str) -> String {
	format!("reply_button{}", id)
}

#[must_use]
pub fn like_path(id: &str) -> String {
	format!("/like_comment/{}", id)
}

#[must_use]
pub fn unlike_path(id: &str) -> String {
	format!("/unlike_comment/{}", id)
}

/// Formats an id that the markup passed as a JavaScript number (`handleReplyVisibility({{ comment.id }})`).
///
/// Returns [`None`] for non-integral or non-finite values, which no template renders as an id.
#[must_use]
pub fn from_number(value: f64) -> Option<String> {
	if !value.is_finite() || value.fract() != 0.0 {
		return None;
	}
	// `-0` is `"0"` in JavaScript.
	Some(format!("{}", value + 0.0))
}
