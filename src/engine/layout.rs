//! Target-position assignment for the filtered list.

use super::item::Item;
use super::matcher;

/// Vertical geometry of the list, in abstract units (the renderer maps
/// units to terminal rows).
#[derive(Debug, Clone, Copy)]
pub struct ListGeometry {
	/// Y coordinate of the first matching item.
	pub start_y: f32,
	/// Height of a single item.
	pub item_height: f32,
	/// Gap between consecutive items.
	pub spacing: f32,
}

impl ListGeometry {
	/// Vertical stride from one item's top to the next.
	#[must_use]
	pub fn stride(&self) -> f32 {
		self.item_height + self.spacing
	}

	/// Total content height occupied by `count` matching items.
	#[must_use]
	pub fn content_height(&self, count: usize) -> f32 {
		count as f32 * self.stride()
	}
}

/// Re-evaluate the filter and assign target positions in one pass.
///
/// Matching items are stacked top to bottom in master-list order.
/// Non-matching items keep whatever target they had: their filter
/// opacity is animating toward zero, so the stale target never produces
/// a visible artifact. Runs once per query change, not once per frame.
pub fn recompute(items: &mut [Item], query: &str, geometry: ListGeometry) {
	let mut y = geometry.start_y;
	for item in items {
		item.is_match = matcher::matches(&item.text, query);
		if item.is_match {
			item.target_y = y;
			y += geometry.stride();
		}
	}
}

/// Number of items currently surviving the filter.
#[must_use]
pub fn match_count(items: &[Item]) -> usize {
	items.iter().filter(|item| item.is_match).count()
}
