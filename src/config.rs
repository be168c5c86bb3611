use crate::Error;
use core::time::Duration;
use serde::Deserialize;

/// Colours, labels, class names and transition delays shared by all controllers.
///
/// Every field has a default matching the stock page templates and stylesheet,
/// so a partial JSON object is enough to override individual values.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// Highlight colour: collapsed thread toggles, liked buttons and open reply-box triggers.
	pub accent_color: String,
	pub base_color: String,

	/// Delay before a collapsing thread's label and icon flip.
	pub label_delay_ms: u32,
	/// Delay between a wrapper's `hidden` class and `display: none`. Should match the stylesheet's transition.
	pub display_delay_ms: u32,

	pub hide_label: String,
	pub show_label: String,
	pub expanded_icon: String,
	pub collapsed_icon: String,

	pub visible_class: String,
	pub hidden_class: String,

	pub liked_class: String,
	pub unliked_class: String,

	/// Origin that like/unlike paths are resolved against. The page's own origin when unset.
	pub base_url: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			accent_color: "#F2A900".to_owned(),
			base_color: "white".to_owned(),
			label_delay_ms: 150,
			display_delay_ms: 200,
			hide_label: "Hide Replies".to_owned(),
			show_label: "Show Replies".to_owned(),
			expanded_icon: "icon solid fa-eye".to_owned(),
			collapsed_icon: "icon solid fa-eye-slash".to_owned(),
			visible_class: "visible".to_owned(),
			hidden_class: "hidden".to_owned(),
			liked_class: "icon solid fa-thumbs-up".to_owned(),
			unliked_class: "icon fa-thumbs-up".to_owned(),
			base_url: None,
		}
	}
}

impl Config {
	/// Parses a (possibly partial) JSON object, filling in defaults for absent fields.
	///
	/// # Errors
	///
	/// Iff `json` isn't a JSON object with correctly typed fields.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		Ok(serde_json::from_str(json)?)
	}

	#[must_use]
	pub fn label_delay(&self) -> Duration {
		Duration::from_millis(self.label_delay_ms.into())
	}

	#[must_use]
	pub fn display_delay(&self) -> Duration {
		Duration::from_millis(self.display_delay_ms.into())
	}
}
