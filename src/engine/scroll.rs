//! Scroll offset, inertia, and scrollbar-thumb interaction.
//!
//! Two input paths mutate the offset: wheel events feed a velocity that
//! decays geometrically each frame (inertia), and dragging the thumb
//! maps the pointer position linearly onto the offset, bypassing
//! velocity entirely. The offset is clamped into `[0, max_scroll]`
//! after every mutation.

/// Screen-space rectangle of the scrollbar track.
#[derive(Debug, Clone, Copy)]
pub struct TrackGeometry {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
	/// Lower bound on thumb height so it stays grabbable.
	pub min_thumb: f32,
}

/// Computed scrollbar thumb placement within the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
	pub y: f32,
	pub height: f32,
}

/// Behavioral tunables for the controller.
#[derive(Debug, Clone, Copy)]
pub struct ScrollParams {
	/// Velocity added per wheel notch.
	pub wheel_step: f32,
	/// Per-frame velocity multiplier, strictly below one.
	pub decay: f32,
	/// Velocities below this magnitude snap to zero.
	pub min_velocity: f32,
}

/// Owns the scroll offset, its velocity, and the drag state.
#[derive(Debug, Clone)]
pub struct ScrollController {
	offset: f32,
	velocity: f32,
	/// Pointer offset into the thumb while dragging.
	drag_anchor: Option<f32>,
	params: ScrollParams,
}

impl ScrollController {
	#[must_use]
	pub fn new(params: ScrollParams) -> Self {
		Self {
			offset: 0.0,
			velocity: 0.0,
			drag_anchor: None,
			params,
		}
	}

	/// Current scroll offset in content units.
	#[must_use]
	pub fn offset(&self) -> f32 {
		self.offset
	}

	/// Whether the thumb is currently being dragged.
	#[must_use]
	pub fn is_dragging(&self) -> bool {
		self.drag_anchor.is_some()
	}

	/// Accumulate wheel input into velocity. Positive `notches` scroll
	/// the content down (offset grows). The offset itself is untouched
	/// until the next [`integrate`](Self::integrate).
	pub fn wheel(&mut self, notches: f32) {
		self.velocity += notches * self.params.wheel_step;
	}

	/// Apply one frame of inertia and clamp the offset.
	///
	/// While a drag is active the velocity is not applied; the pointer
	/// drives the offset directly.
	pub fn integrate(&mut self, max_scroll: f32) {
		if self.drag_anchor.is_none() {
			if self.velocity.abs() > self.params.min_velocity {
				self.offset += self.velocity;
				self.velocity *= self.params.decay;
			} else {
				self.velocity = 0.0;
			}
		}
		self.offset = clamp(self.offset, max_scroll);
	}

	/// Begin dragging with the pointer at `pointer_y` inside `thumb`.
	pub fn begin_drag(&mut self, pointer_y: f32, thumb: Thumb) {
		self.drag_anchor = Some(pointer_y - thumb.y);
	}

	/// Track a pointer move while dragging: clamp the implied thumb
	/// position to the track and map it linearly onto the offset.
	///
	/// Does nothing unless a drag is active. A degenerate track where
	/// the thumb fills it entirely pins the offset to the origin.
	pub fn drag_to(&mut self, pointer_y: f32, track: TrackGeometry, thumb_height: f32, max_scroll: f32) {
		let Some(anchor) = self.drag_anchor else {
			return;
		};

		let top = track.y;
		let bottom = track.y + (track.height - thumb_height).max(0.0);
		let thumb_y = (pointer_y - anchor).clamp(top, bottom);

		let travel = track.height - thumb_height;
		self.offset = if travel > 0.0 && max_scroll > 0.0 {
			clamp((thumb_y - track.y) / travel * max_scroll, max_scroll)
		} else {
			0.0
		};
	}

	/// Release the drag. Velocity stays whatever it was.
	pub fn end_drag(&mut self) {
		self.drag_anchor = None;
	}

	/// Snap back to the top. Called when the query changes so a new
	/// result set starts at the beginning.
	pub fn reset_offset(&mut self) {
		self.offset = 0.0;
	}

	/// Compute the thumb rectangle for the current offset.
	#[must_use]
	pub fn thumb(&self, track: TrackGeometry, content_height: f32, visible_height: f32) -> Thumb {
		if content_height <= 0.0 {
			return Thumb {
				y: track.y,
				height: track.height,
			};
		}

		let height = (visible_height / content_height * track.height)
			.max(track.min_thumb)
			.min(track.height);

		let max_scroll = max_scroll(content_height, visible_height);
		let travel = track.height - height;
		let y = if max_scroll > 0.0 && travel > 0.0 {
			track.y + self.offset / max_scroll * travel
		} else {
			track.y
		};

		Thumb { y, height }
	}
}

/// Largest legal offset for the given content and viewport sizes.
#[must_use]
pub fn max_scroll(content_height: f32, visible_height: f32) -> f32 {
	(content_height - visible_height).max(0.0)
}

fn clamp(offset: f32, max_scroll: f32) -> f32 {
	offset.clamp(0.0, max_scroll.max(0.0))
}

#[cfg(test)]
mod tests {
	use super::*;

	const PARAMS: ScrollParams = ScrollParams {
		wheel_step: 2.0,
		decay: 0.9,
		min_velocity: 0.1,
	};

	const TRACK: TrackGeometry = TrackGeometry {
		x: 50.0,
		y: 5.0,
		width: 1.0,
		height: 20.0,
		min_thumb: 2.0,
	};

	#[test]
	fn wheel_feeds_velocity_not_offset() {
		let mut scroll = ScrollController::new(PARAMS);
		scroll.wheel(1.0);
		assert_eq!(scroll.offset(), 0.0);

		scroll.integrate(100.0);
		assert_eq!(scroll.offset(), 2.0);
	}

	#[test]
	fn velocity_decays_geometrically_and_snaps_to_zero() {
		let mut scroll = ScrollController::new(PARAMS);
		scroll.wheel(1.0);

		let mut last = 0.0;
		let mut frames = 0;
		loop {
			scroll.integrate(1000.0);
			frames += 1;
			assert!(frames < 200, "velocity never died out");
			if scroll.offset() == last {
				break;
			}
			last = scroll.offset();
		}

		// Once settled, further frames change nothing.
		scroll.integrate(1000.0);
		assert_eq!(scroll.offset(), last);
	}

	#[test]
	fn offset_is_clamped_after_every_update() {
		let mut scroll = ScrollController::new(PARAMS);
		for _ in 0..50 {
			scroll.wheel(5.0);
			scroll.integrate(30.0);
			assert!(scroll.offset() >= 0.0);
			assert!(scroll.offset() <= 30.0);
		}

		for _ in 0..100 {
			scroll.wheel(-5.0);
			scroll.integrate(30.0);
			assert!(scroll.offset() >= 0.0);
			assert!(scroll.offset() <= 30.0);
		}
	}

	#[test]
	fn drag_maps_thumb_position_linearly() {
		let mut scroll = ScrollController::new(PARAMS);
		let thumb = scroll.thumb(TRACK, 200.0, 20.0);
		assert_eq!(thumb.y, TRACK.y);

		scroll.begin_drag(thumb.y + 1.0, thumb);
		assert!(scroll.is_dragging());

		// Pointer at the very bottom of the track travel.
		let max = max_scroll(200.0, 20.0);
		scroll.drag_to(1000.0, TRACK, thumb.height, max);
		assert_eq!(scroll.offset(), max);

		// Pointer halfway along the travel.
		let travel = TRACK.height - thumb.height;
		scroll.drag_to(TRACK.y + 1.0 + travel / 2.0, TRACK, thumb.height, max);
		assert!((scroll.offset() - max / 2.0).abs() < 1e-3);

		scroll.end_drag();
		assert!(!scroll.is_dragging());
	}

	#[test]
	fn drag_suppresses_inertia() {
		let mut scroll = ScrollController::new(PARAMS);
		scroll.wheel(3.0);
		let thumb = scroll.thumb(TRACK, 200.0, 20.0);
		scroll.begin_drag(thumb.y, thumb);

		scroll.integrate(100.0);
		assert_eq!(scroll.offset(), 0.0, "velocity must not apply mid-drag");
	}

	#[test]
	fn degenerate_geometry_pins_everything_to_the_origin() {
		let mut scroll = ScrollController::new(PARAMS);

		// Content fits entirely: max_scroll is zero.
		assert_eq!(max_scroll(10.0, 20.0), 0.0);
		scroll.wheel(10.0);
		scroll.integrate(max_scroll(10.0, 20.0));
		assert_eq!(scroll.offset(), 0.0);

		// Thumb as tall as the track: no travel.
		let thumb = scroll.thumb(TRACK, 15.0, 20.0);
		assert_eq!(thumb.height, TRACK.height);
		assert_eq!(thumb.y, TRACK.y);

		scroll.begin_drag(thumb.y, thumb);
		scroll.drag_to(500.0, TRACK, thumb.height, 0.0);
		assert_eq!(scroll.offset(), 0.0);
	}

	#[test]
	fn thumb_height_respects_the_minimum() {
		let scroll = ScrollController::new(PARAMS);
		let thumb = scroll.thumb(TRACK, 100_000.0, 20.0);
		assert_eq!(thumb.height, TRACK.min_thumb);
	}

	#[test]
	fn thumb_tracks_the_offset() {
		let mut scroll = ScrollController::new(PARAMS);
		let max = max_scroll(200.0, 20.0);
		scroll.wheel(1000.0);
		scroll.integrate(max);
		assert_eq!(scroll.offset(), max);

		let thumb = scroll.thumb(TRACK, 200.0, 20.0);
		assert!((thumb.y - (TRACK.y + TRACK.height - thumb.height)).abs() < 1e-3);
	}

	#[test]
	fn reset_returns_to_the_top_without_touching_velocity() {
		let mut scroll = ScrollController::new(PARAMS);
		scroll.wheel(2.0);
		scroll.integrate(100.0);
		assert!(scroll.offset() > 0.0);

		scroll.reset_offset();
		assert_eq!(scroll.offset(), 0.0);

		// Leftover inertia still applies on the next frame.
		scroll.integrate(100.0);
		assert!(scroll.offset() > 0.0);
	}
}
