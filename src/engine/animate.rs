//! Per-frame animation of item position and opacity.
//!
//! Three independent channels advance every frame for every item:
//! an edge fade derived directly from the item's on-screen position, a
//! constant-step filter fade driven by the match flag, and an
//! exponentially eased slide toward the layout target. The constant
//! filter step is deliberately snappier than the positional easing.

use super::item::Item;

/// Tunables for the per-frame animation step.
#[derive(Debug, Clone, Copy)]
pub struct AnimationParams {
	/// Fraction of the remaining distance covered per frame.
	pub easing: f32,
	/// Opacity units added or removed per frame while the filter fade
	/// is in flight. Not time-scaled.
	pub fade_step: f32,
}

/// Screen-space band inside which items are fully opaque.
#[derive(Debug, Clone, Copy)]
pub struct FadeBand {
	/// Top of the visible band.
	pub top: f32,
	/// Bottom of the visible band.
	pub bottom: f32,
	/// Distance past either edge at which items are fully gone.
	pub margin: f32,
	/// Distance over which opacity ramps from 255 to 0 past an edge.
	pub range: f32,
}

/// Advance one item by one frame.
///
/// `scroll_offset` converts the item's content-space position into the
/// screen space of `band`.
pub fn advance(
	item: &mut Item,
	scroll_offset: f32,
	item_height: f32,
	band: FadeBand,
	params: AnimationParams,
) {
	let top = item.current_y - scroll_offset;
	let bottom = top + item_height;

	item.edge_opacity = edge_opacity(top, bottom, band);

	// Filter fade steps at a constant rate toward 0 or 255.
	if item.is_match {
		item.search_opacity = (item.search_opacity + params.fade_step).min(255.0);
	} else {
		item.search_opacity = (item.search_opacity - params.fade_step).max(0.0);
	}

	// Exponential ease toward the target, snapping once the remaining
	// delta drops under one unit so the value settles exactly.
	let dy = item.target_y - item.current_y;
	if dy.abs() > 1.0 {
		item.current_y += dy * params.easing;
	} else {
		item.current_y = item.target_y;
	}
}

fn edge_opacity(top: f32, bottom: f32, band: FadeBand) -> f32 {
	if bottom < band.top - band.margin || top > band.bottom + band.margin {
		0.0
	} else if bottom < band.top {
		let distance = band.top - bottom;
		(255.0 - 255.0 * (distance / band.range)).max(0.0)
	} else if top > band.bottom {
		let distance = top - band.bottom;
		(255.0 - 255.0 * (distance / band.range)).max(0.0)
	} else {
		255.0
	}
}
