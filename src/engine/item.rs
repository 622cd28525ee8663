//! List entries tracked by the engine.

/// Stable identifier of an item: its index in the master list.
pub type ItemId = usize;

/// A single list entry and its animated visual state.
///
/// Items are created once from the catalog and never destroyed during a
/// session; only the match flag, the layout target, and the animated
/// position/opacities mutate afterwards.
#[derive(Debug, Clone)]
pub struct Item {
	/// Index into the master list, immutable.
	pub id: ItemId,
	/// Display text, immutable after creation.
	pub text: String,
	/// Whether the item survives the current filter query.
	pub is_match: bool,
	/// Vertical position the item animates toward. Only meaningful
	/// while `is_match` holds; deliberately left stale otherwise.
	pub target_y: f32,
	/// Current animated vertical position.
	pub current_y: f32,
	/// Animated filter opacity in `[0, 255]`.
	pub search_opacity: f32,
	/// Edge-fade opacity in `[0, 255]`, recomputed every frame from
	/// `current_y` and the viewport bounds. Never animated.
	pub edge_opacity: f32,
}

impl Item {
	/// Create an item at its initial resting position.
	#[must_use]
	pub fn new(id: ItemId, text: impl Into<String>, y: f32) -> Self {
		Self {
			id,
			text: text.into(),
			is_match: true,
			target_y: y,
			current_y: y,
			search_opacity: 255.0,
			edge_opacity: 255.0,
		}
	}

	/// Combined opacity: an item is only as visible as the more
	/// transparent of its filter fade and its edge fade.
	#[must_use]
	pub fn effective_opacity(&self) -> f32 {
		self.search_opacity.min(self.edge_opacity)
	}

	/// Whether the item is drawn and hit-testable this frame.
	#[must_use]
	pub fn visible(&self) -> bool {
		self.effective_opacity() > 0.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn effective_opacity_takes_the_minimum() {
		let mut item = Item::new(0, "Alpha", 0.0);
		item.search_opacity = 120.0;
		item.edge_opacity = 200.0;
		assert_eq!(item.effective_opacity(), 120.0);

		item.edge_opacity = 40.0;
		assert_eq!(item.effective_opacity(), 40.0);
	}

	#[test]
	fn invisible_when_either_fade_reaches_zero() {
		let mut item = Item::new(0, "Alpha", 0.0);
		assert!(item.visible());

		item.search_opacity = 0.0;
		assert!(!item.visible());

		item.search_opacity = 255.0;
		item.edge_opacity = 0.0;
		assert!(!item.visible());
	}
}
