//! Recognized options and their defaults.
//! `Config` derives `Deserialize`, so hosts can load it from a configuration file or environment through any serde front end and fall back to the defaults for absent keys.

use crate::PageNum;

/// Options injected at construction instead of being hardcoded constants.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
	/// The reserved substring in a URL template that is substituted with a concrete page number. Default `@page@`.
	#[serde(default = "default_placeholder_token")]
	pub placeholder_token: String,
	/// Label text of the link to the previous page. Default `< Previous`.
	#[serde(default = "default_previous_label")]
	pub previous_label: String,
	/// Label text of the link to the next page. Default `Next >`.
	#[serde(default = "default_next_label")]
	pub next_label: String,
	/// Number of items per page. Default 20.
	#[serde(default = "default_page_size")]
	pub page_size: PageNum,
	/// Maximum number of page links displayed. Default 25.
	#[serde(default = "default_max_window")]
	pub max_window: PageNum,
}

fn default_placeholder_token() -> String {
	"@page@".to_owned()
}

fn default_previous_label() -> String {
	"< Previous".to_owned()
}

fn default_next_label() -> String {
	"Next >".to_owned()
}

const fn default_page_size() -> PageNum {
	20
}

const fn default_max_window() -> PageNum {
	25
}

impl Default for Config {
	fn default() -> Self {
		Self {
			placeholder_token: default_placeholder_token(),
			previous_label: default_previous_label(),
			next_label: default_next_label(),
			page_size: default_page_size(),
			max_window: default_max_window(),
		}
	}
}
