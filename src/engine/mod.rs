//! The list-filtering-and-layout engine.
//!
//! [`ListEngine::tick`] is the single ordered pipeline the rest of the
//! application drives: process the frame's input events, re-run layout
//! if the query changed (resetting the scroll to the top), integrate
//! scroll inertia, advance every item's animation, and emit the frame's
//! visual state plus any signals. Mutation order is fixed inside the
//! pipeline so callers cannot get it wrong.

pub mod animate;
pub mod editor;
pub mod event;
pub mod item;
pub mod layout;
pub mod matcher;
pub mod scroll;

use tracing::debug;

pub use event::{EngineSignal, FrameOutput, InputEvent};

use animate::{AnimationParams, FadeBand};
use editor::QueryEditor;
use event::{ItemFrame, QueryFrame};
use item::{Item, ItemId};
use layout::ListGeometry;
use scroll::{ScrollController, ScrollParams, Thumb, TrackGeometry};

/// Engine tunables, resolved once at startup from settings.
#[derive(Debug, Clone, Copy)]
pub struct EngineParams {
	pub geometry: ListGeometry,
	pub fade_margin: f32,
	pub fade_range: f32,
	pub animation: AnimationParams,
	pub scroll: ScrollParams,
	/// Frames per half blink cycle of the query cursor.
	pub blink_frames: u64,
}

/// Screen-space description of the UI for one frame. The host rebuilds
/// this from the terminal size every tick, so resizes need no special
/// handling inside the engine.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
	/// Top of the visible list band.
	pub top: f32,
	/// Bottom of the visible list band.
	pub bottom: f32,
	/// Left edge of item rows.
	pub list_x: f32,
	/// Width of item rows.
	pub list_width: f32,
	/// Scrollbar track rectangle.
	pub track: TrackGeometry,
}

impl Viewport {
	/// Height of the visible band.
	#[must_use]
	pub fn height(&self) -> f32 {
		(self.bottom - self.top).max(0.0)
	}
}

/// Owns all mutable list state: items, query, scroll, and pointer
/// bookkeeping. Single-threaded by construction; the host mutates it
/// only through [`tick`](Self::tick).
pub struct ListEngine {
	items: Vec<Item>,
	editor: QueryEditor,
	scroll: ScrollController,
	params: EngineParams,
	pointer: (f32, f32),
	hovered: Option<ItemId>,
	/// Item under the pointer when the button went down; activation
	/// fires only if the button comes up over the same item.
	pressed: Option<ItemId>,
	frame: u64,
}

impl ListEngine {
	/// Build the engine from the catalog's display texts, applying the
	/// initial query immediately so the first frame is already laid out.
	#[must_use]
	pub fn new<S: AsRef<str>>(texts: &[S], initial_query: &str, params: EngineParams) -> Self {
		let geometry = params.geometry;
		let mut items: Vec<Item> = texts
			.iter()
			.enumerate()
			.map(|(id, text)| {
				let y = geometry.start_y + geometry.content_height(id);
				Item::new(id, text.as_ref(), y)
			})
			.collect();
		layout::recompute(&mut items, initial_query, geometry);

		Self {
			items,
			editor: QueryEditor::with_text(initial_query),
			scroll: ScrollController::new(params.scroll),
			params,
			pointer: (-1.0, -1.0),
			hovered: None,
			pressed: None,
			frame: 0,
		}
	}

	/// Current filter text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.editor.text()
	}

	/// Current scroll offset in content units.
	#[must_use]
	pub fn scroll_offset(&self) -> f32 {
		self.scroll.offset()
	}

	/// Read access to the item list, master order.
	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	/// Topmost visible matching item, used for keyboard activation.
	#[must_use]
	pub fn first_visible_match(&self) -> Option<ItemId> {
		self.items
			.iter()
			.filter(|item| item.is_match && item.visible())
			.min_by(|a, b| a.current_y.total_cmp(&b.current_y))
			.map(|item| item.id)
	}

	/// Advance the engine by one frame.
	pub fn tick(&mut self, events: &[InputEvent], viewport: Viewport) -> FrameOutput {
		self.frame += 1;
		let mut signals = Vec::new();
		let mut query_changed = false;

		for &event in events {
			self.handle_event(event, viewport, &mut signals, &mut query_changed);
		}

		if query_changed {
			layout::recompute(&mut self.items, self.editor.text(), self.params.geometry);
			self.scroll.reset_offset();
			signals.push(EngineSignal::QueryChanged);
			debug!(query = self.editor.text(), "query changed");
		}

		let content_height = self.content_height();
		let max_scroll = scroll::max_scroll(content_height, viewport.height());
		self.scroll.integrate(max_scroll);

		let band = FadeBand {
			top: viewport.top,
			bottom: viewport.bottom,
			margin: self.params.fade_margin,
			range: self.params.fade_range,
		};
		let offset = self.scroll.offset();
		for item in &mut self.items {
			animate::advance(
				item,
				offset,
				self.params.geometry.item_height,
				band,
				self.params.animation,
			);
		}

		// Hover can change without pointer motion while items slide or
		// the list scrolls underneath the pointer.
		self.refresh_hover(viewport, &mut signals);

		self.output(viewport, content_height, signals)
	}

	fn handle_event(
		&mut self,
		event: InputEvent,
		viewport: Viewport,
		signals: &mut Vec<EngineSignal>,
		query_changed: &mut bool,
	) {
		match event {
			InputEvent::PointerMove { x, y } => {
				self.pointer = (x, y);
				if self.scroll.is_dragging() {
					let (thumb, max_scroll) = self.thumb_state(viewport);
					self.scroll.drag_to(y, viewport.track, thumb.height, max_scroll);
				} else {
					self.refresh_hover(viewport, signals);
				}
			}
			InputEvent::PointerDown { x, y } => {
				self.pointer = (x, y);
				let (thumb, _) = self.thumb_state(viewport);
				if thumb_contains(viewport.track, thumb, x, y) {
					self.scroll.begin_drag(y, thumb);
				} else {
					self.refresh_hover(viewport, signals);
					self.pressed = self.hovered;
				}
			}
			InputEvent::PointerUp => {
				self.scroll.end_drag();
				self.refresh_hover(viewport, signals);
				if let Some(pressed) = self.pressed.take()
					&& self.hovered == Some(pressed)
				{
					signals.push(EngineSignal::Activated(pressed));
				}
			}
			InputEvent::Wheel { notches } => self.scroll.wheel(notches),
			InputEvent::Edit(command) => {
				if self.editor.apply(command) {
					*query_changed = true;
				}
			}
			InputEvent::FocusLost => {
				self.scroll.end_drag();
				self.pressed = None;
				signals.push(EngineSignal::FocusLost);
			}
		}
	}

	fn content_height(&self) -> f32 {
		self.params
			.geometry
			.content_height(layout::match_count(&self.items))
	}

	fn thumb_state(&self, viewport: Viewport) -> (Thumb, f32) {
		let content_height = self.content_height();
		let visible = viewport.height();
		let thumb = self.scroll.thumb(viewport.track, content_height, visible);
		(thumb, scroll::max_scroll(content_height, visible))
	}

	/// Re-derive the hovered item from the pointer position and emit a
	/// signal when it changed.
	fn refresh_hover(&mut self, viewport: Viewport, signals: &mut Vec<EngineSignal>) {
		let hovered = self.hit_test(self.pointer.0, self.pointer.1, viewport);
		if hovered != self.hovered {
			self.hovered = hovered;
			signals.push(EngineSignal::HoverChanged(hovered));
		}
	}

	/// First visible item under `(x, y)`, in master order. Items with
	/// zero effective opacity are never hit.
	fn hit_test(&self, x: f32, y: f32, viewport: Viewport) -> Option<ItemId> {
		if x < viewport.list_x || x >= viewport.list_x + viewport.list_width {
			return None;
		}
		let offset = self.scroll.offset();
		self.items
			.iter()
			.find(|item| {
				let top = item.current_y - offset;
				item.visible() && y >= top && y < top + self.params.geometry.item_height
			})
			.map(|item| item.id)
	}

	fn output(
		&self,
		viewport: Viewport,
		content_height: f32,
		signals: Vec<EngineSignal>,
	) -> FrameOutput {
		let offset = self.scroll.offset();
		let items = self
			.items
			.iter()
			.map(|item| ItemFrame {
				id: item.id,
				y: item.current_y - offset,
				opacity: item.effective_opacity().clamp(0.0, 255.0) as u8,
				visible: item.visible(),
				hovered: self.hovered == Some(item.id),
			})
			.collect();

		let thumb = self
			.scroll
			.thumb(viewport.track, content_height, viewport.height());

		let blink = self.params.blink_frames.max(1);
		FrameOutput {
			items,
			thumb,
			query: QueryFrame {
				text: self.editor.text().to_string(),
				cursor: self.editor.cursor(),
				selection: self.editor.selection(),
				cursor_visible: (self.frame / blink) % 2 == 0,
			},
			match_count: layout::match_count(&self.items),
			signals,
		}
	}
}

fn thumb_contains(track: TrackGeometry, thumb: Thumb, x: f32, y: f32) -> bool {
	x >= track.x && x < track.x + track.width && y >= thumb.y && y < thumb.y + thumb.height
}

#[cfg(test)]
mod tests {
	use super::*;
	use editor::EditCommand;

	fn params() -> EngineParams {
		EngineParams {
			geometry: ListGeometry {
				start_y: 0.0,
				item_height: 1.0,
				spacing: 1.0,
			},
			fade_margin: 4.0,
			fade_range: 2.0,
			animation: AnimationParams {
				easing: 0.2,
				fade_step: 15.0,
			},
			scroll: ScrollParams {
				wheel_step: 2.0,
				decay: 0.9,
				min_velocity: 0.1,
			},
			blink_frames: 30,
		}
	}

	fn viewport() -> Viewport {
		Viewport {
			top: 0.0,
			bottom: 20.0,
			list_x: 0.0,
			list_width: 40.0,
			track: TrackGeometry {
				x: 40.0,
				y: 0.0,
				width: 1.0,
				height: 20.0,
				min_thumb: 1.0,
			},
		}
	}

	fn engine() -> ListEngine {
		ListEngine::new(&["Alpha", "Beta", "Gamma"], "", params())
	}

	fn edit(c: char) -> InputEvent {
		InputEvent::Edit(EditCommand::Insert(c))
	}

	#[test]
	fn query_edit_relayouts_and_resets_scroll_in_the_same_tick() {
		let mut engine = engine();

		// Scroll away from the top first.
		engine.tick(&[InputEvent::Wheel { notches: 3.0 }], viewport());
		for _ in 0..5 {
			engine.tick(&[], viewport());
		}

		let out = engine.tick(&[edit('a'), edit('a')], viewport());
		assert!(out.signals.contains(&EngineSignal::QueryChanged));
		assert_eq!(engine.query(), "aa");
		assert_eq!(out.match_count, 2);

		// Alpha and Gamma restacked from the top, Beta dropped.
		assert!(engine.items()[0].is_match);
		assert!(!engine.items()[1].is_match);
		assert!(engine.items()[2].is_match);
		assert_eq!(engine.items()[0].target_y, 0.0);
		assert_eq!(engine.items()[2].target_y, 2.0);
	}

	#[test]
	fn query_reset_happens_before_scroll_integration() {
		let mut engine = ListEngine::new(
			&(0..100).map(|i| format!("Mod {i}")).collect::<Vec<_>>(),
			"",
			params(),
		);

		engine.tick(&[InputEvent::Wheel { notches: 20.0 }], viewport());
		for _ in 0..40 {
			engine.tick(&[], viewport());
		}
		assert!(engine.scroll_offset() > 0.0);

		// The offset reset lands inside this same tick; only the
		// leftover inertia of one integration step survives it.
		let before = engine.scroll_offset();
		engine.tick(&[edit('z')], viewport());
		assert!(engine.scroll_offset() < before);
	}

	#[test]
	fn non_edit_keys_do_not_trigger_relayout() {
		let mut engine = engine();
		let out = engine.tick(&[InputEvent::Edit(EditCommand::MoveLeft)], viewport());
		assert!(!out.signals.contains(&EngineSignal::QueryChanged));
	}

	#[test]
	fn click_activates_only_when_press_and_release_agree() {
		let mut engine = engine();
		// Items rest at y = 0, 2, 4 with no scroll.
		let click = [
			InputEvent::PointerDown { x: 5.0, y: 2.0 },
			InputEvent::PointerUp,
		];
		let out = engine.tick(&click, viewport());
		assert!(out.signals.contains(&EngineSignal::Activated(1)));

		// Press on one item, release over another: no activation.
		let slide = [
			InputEvent::PointerDown { x: 5.0, y: 0.0 },
			InputEvent::PointerMove { x: 5.0, y: 4.0 },
			InputEvent::PointerUp,
		];
		let out = engine.tick(&slide, viewport());
		assert!(
			!out
				.signals
				.iter()
				.any(|s| matches!(s, EngineSignal::Activated(_)))
		);
	}

	#[test]
	fn invisible_items_are_not_hit_testable() {
		let mut engine = engine();
		// Fade Beta out completely.
		for _ in 0..30 {
			engine.tick(&[], viewport());
		}
		engine.tick(&[edit('a'), edit('a')], viewport());
		for _ in 0..30 {
			engine.tick(&[], viewport());
		}
		assert!(!engine.items()[1].visible());

		// Beta's stale position is y=2; Gamma now animates there.
		// Clicking at y=2 must hit Gamma (id 2), never Beta.
		let out = engine.tick(
			&[
				InputEvent::PointerDown { x: 5.0, y: 2.0 },
				InputEvent::PointerUp,
			],
			viewport(),
		);
		assert!(out.signals.contains(&EngineSignal::Activated(2)));
	}

	#[test]
	fn hover_transitions_emit_exactly_once() {
		let mut engine = engine();
		let out = engine.tick(&[InputEvent::PointerMove { x: 5.0, y: 0.0 }], viewport());
		let hovers: Vec<_> = out
			.signals
			.iter()
			.filter(|s| matches!(s, EngineSignal::HoverChanged(_)))
			.collect();
		assert_eq!(hovers.len(), 1);

		// Pointer stays put: no further transitions.
		let out = engine.tick(&[], viewport());
		assert!(
			!out
				.signals
				.iter()
				.any(|s| matches!(s, EngineSignal::HoverChanged(_)))
		);
	}

	#[test]
	fn focus_lost_cancels_press_and_drag() {
		let mut engine = engine();
		let out = engine.tick(
			&[
				InputEvent::PointerDown { x: 5.0, y: 0.0 },
				InputEvent::FocusLost,
				InputEvent::PointerUp,
			],
			viewport(),
		);
		assert!(out.signals.contains(&EngineSignal::FocusLost));
		assert!(
			!out
				.signals
				.iter()
				.any(|s| matches!(s, EngineSignal::Activated(_)))
		);
	}

	#[test]
	fn empty_master_list_is_harmless() {
		let texts: [&str; 0] = [];
		let mut engine = ListEngine::new(&texts, "", params());
		let out = engine.tick(
			&[
				edit('q'),
				InputEvent::Wheel { notches: 5.0 },
				InputEvent::PointerDown { x: 5.0, y: 5.0 },
				InputEvent::PointerUp,
			],
			viewport(),
		);
		assert!(out.items.is_empty());
		assert_eq!(out.match_count, 0);
		assert_eq!(engine.scroll_offset(), 0.0);
	}

	#[test]
	fn initial_query_is_applied_at_construction() {
		let engine = ListEngine::new(&["Alpha", "Beta", "Gamma"], "aa", params());
		assert_eq!(engine.query(), "aa");
		assert!(engine.items()[0].is_match);
		assert!(!engine.items()[1].is_match);
	}

	#[test]
	fn first_visible_match_is_the_topmost() {
		let mut engine = engine();
		engine.tick(&[], viewport());
		assert_eq!(engine.first_visible_match(), Some(0));
	}

	#[test]
	fn output_reports_screen_space_positions() {
		let mut engine = ListEngine::new(
			&(0..100).map(|i| format!("Mod {i}")).collect::<Vec<_>>(),
			"",
			params(),
		);
		engine.tick(&[InputEvent::Wheel { notches: 5.0 }], viewport());
		let out = engine.tick(&[], viewport());
		let offset = engine.scroll_offset();
		assert!(offset > 0.0);
		assert_eq!(out.items[0].y, engine.items()[0].current_y - offset);
	}
}
