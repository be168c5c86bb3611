//! Loading reply-thread structure that the page templates encode into markup.

use crate::{ids, Error, View};

/// Splits a `;`-separated list of child ids, discarding empty segments.
///
/// Segments are otherwise taken verbatim, including any whitespace.
#[must_use]
pub fn parse_children(value: &str) -> Vec<String> {
	value.split(';').filter(|segment| !segment.is_empty()).map(str::to_owned).collect()
}

/// Reads the child ids from the `value` attribute of `parent_id`'s thread toggle.
///
/// An absent attribute is treated as an empty list.
///
/// # Errors
///
/// [`Error::MissingElement`] iff the toggle doesn't exist.
pub fn load_children<V: View>(view: &V, parent_id: &str) -> Result<Vec<String>, Error> {
	Ok(view
		.attribute(&ids::hide_reply(parent_id), "value")?
		.as_deref()
		.map(parse_children)
		.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::parse_children;

	#[test]
	fn drops_empty_segments() {
		assert_eq!(parse_children(";12;;13;"), ["12", "13"]);
	}

	#[test]
	fn empty_value() {
		assert!(parse_children("").is_empty());
		assert!(parse_children(";;").is_empty());
	}
}
