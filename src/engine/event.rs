//! Event and output contracts between the engine and its host.
//!
//! The engine never polls devices: the host runtime hands it a batch of
//! [`InputEvent`]s once per frame and receives a [`FrameOutput`] back.
//! Rendering and side effects (opening the browser, sounds) happen
//! outside, driven by the output and its [`EngineSignal`]s.

use super::editor::EditCommand;
use super::item::ItemId;
use super::scroll::Thumb;

/// One input event consumed by the engine during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
	/// Pointer moved to screen position `(x, y)`.
	PointerMove { x: f32, y: f32 },
	/// Primary button pressed at `(x, y)`.
	PointerDown { x: f32, y: f32 },
	/// Primary button released.
	PointerUp,
	/// Wheel motion; positive notches scroll the content down.
	Wheel { notches: f32 },
	/// A query edit command.
	Edit(EditCommand),
	/// The host window lost input focus.
	FocusLost,
}

/// Per-item visual state handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
	pub id: ItemId,
	/// Screen-space top of the item.
	pub y: f32,
	/// Effective opacity, 0 (gone) to 255 (solid).
	pub opacity: u8,
	/// Whether the item is drawn and hit-testable.
	pub visible: bool,
	/// Whether the pointer rests on the item.
	pub hovered: bool,
}

/// Snapshot of the query line for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFrame {
	pub text: String,
	/// Cursor position in characters.
	pub cursor: usize,
	/// Sorted selection bounds in characters.
	pub selection: (usize, usize),
	/// Blink phase: whether the cursor is drawn this frame.
	pub cursor_visible: bool,
}

/// Out-of-band notifications raised during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineSignal {
	/// A visible item was activated.
	Activated(ItemId),
	/// The hovered item changed (`None` when nothing is hovered).
	HoverChanged(Option<ItemId>),
	/// The filter text changed this tick.
	QueryChanged,
	/// Input focus left the host window.
	FocusLost,
}

/// Everything produced by one engine tick.
#[derive(Debug, Clone)]
pub struct FrameOutput {
	/// Visual state for every master-list item, in master order.
	pub items: Vec<ItemFrame>,
	/// Scrollbar thumb placement.
	pub thumb: Thumb,
	/// Query line snapshot.
	pub query: QueryFrame,
	/// Number of items surviving the filter.
	pub match_count: usize,
	/// Signals raised this tick, in order.
	pub signals: Vec<EngineSignal>,
}
