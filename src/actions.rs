//! Activation side effects.
//!
//! The engine only reports that an item was activated or hovered; what
//! happens next lives behind [`ActionHandler`]. The shipped handler
//! opens a web search in the default browser on a detached thread so a
//! slow or missing browser can never stall the frame loop, and its
//! failures stop at that thread's boundary.

use std::thread;

use tracing::{debug, warn};

use crate::catalog::ModEntry;

/// Receiver for engine activation and hover notifications.
pub trait ActionHandler {
	/// A visible item was clicked or accepted with Enter.
	fn activate(&self, entry: &ModEntry);

	/// The hovered item changed. Optional capability; the default does
	/// nothing.
	fn hover_changed(&self, _entry: Option<&ModEntry>) {}
}

/// Opens a web search for the activated entry's search key.
#[derive(Debug, Clone)]
pub struct WebSearchHandler {
	base_url: String,
}

impl WebSearchHandler {
	#[must_use]
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}

	fn search_url(&self, key: &str) -> String {
		format!("{}{}", self.base_url, key.replace(' ', "+"))
	}
}

impl Default for WebSearchHandler {
	fn default() -> Self {
		Self::new("https://www.google.com/search?q=")
	}
}

impl ActionHandler for WebSearchHandler {
	fn activate(&self, entry: &ModEntry) {
		let url = self.search_url(&entry.search_key);
		debug!(name = %entry.name, url = %url, "opening web search");
		thread::spawn(move || {
			if let Err(err) = open::that(&url) {
				warn!(%err, url = %url, "failed to open browser");
			}
		});
	}

	fn hover_changed(&self, entry: Option<&ModEntry>) {
		if let Some(entry) = entry {
			debug!(name = %entry.name, "hover");
		}
	}
}
