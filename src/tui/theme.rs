//! Color themes and opacity blending.
//!
//! The engine reports per-item opacity in `[0, 255]`; terminals have no
//! alpha channel, so the renderer fakes the fade by blending the item's
//! foreground toward the background color.

use ratatui::style::Color;

/// Colors for one theme. All colors are concrete RGB values so opacity
/// blending stays well-defined.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub background: Color,
	pub item_fg: Color,
	pub item_hover_bg: Color,
	pub query_fg: Color,
	pub selection_bg: Color,
	pub hint_fg: Color,
	pub border_fg: Color,
	pub track_fg: Color,
	pub thumb_fg: Color,
}

/// Dark theme, the default.
#[must_use]
pub fn mineshaft() -> Theme {
	Theme {
		background: Color::Rgb(30, 30, 30),
		item_fg: Color::Rgb(222, 214, 196),
		item_hover_bg: Color::Rgb(70, 70, 70),
		query_fg: Color::Rgb(255, 255, 255),
		selection_bg: Color::Rgb(80, 100, 140),
		hint_fg: Color::Rgb(130, 125, 115),
		border_fg: Color::Rgb(95, 90, 80),
		track_fg: Color::Rgb(50, 50, 50),
		thumb_fg: Color::Rgb(200, 200, 200),
	}
}

/// Light theme.
#[must_use]
pub fn parchment() -> Theme {
	Theme {
		background: Color::Rgb(240, 233, 216),
		item_fg: Color::Rgb(60, 50, 40),
		item_hover_bg: Color::Rgb(215, 205, 180),
		query_fg: Color::Rgb(30, 25, 20),
		selection_bg: Color::Rgb(190, 200, 220),
		hint_fg: Color::Rgb(150, 140, 120),
		border_fg: Color::Rgb(170, 160, 140),
		track_fg: Color::Rgb(220, 212, 192),
		thumb_fg: Color::Rgb(110, 100, 85),
	}
}

/// Names of all builtin themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	vec!["mineshaft", "parchment"]
}

/// Look up a builtin theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name {
		"mineshaft" => Some(mineshaft()),
		"parchment" => Some(parchment()),
		_ => None,
	}
}

/// Default theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	mineshaft()
}

/// Blend `fg` toward `bg` by `alpha`: 255 keeps `fg`, 0 yields `bg`.
///
/// Non-RGB colors cannot be interpolated; those fall back to a hard
/// cutoff at half opacity.
#[must_use]
pub fn blend(fg: Color, bg: Color, alpha: u8) -> Color {
	match (rgb(fg), rgb(bg)) {
		(Some((fr, fg_, fb)), Some((br, bg_, bb))) => {
			let a = f32::from(alpha) / 255.0;
			Color::Rgb(mix(fr, br, a), mix(fg_, bg_, a), mix(fb, bb, a))
		}
		_ if alpha >= 128 => fg,
		_ => bg,
	}
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
	match color {
		Color::Rgb(r, g, b) => Some((r, g, b)),
		_ => None,
	}
}

fn mix(fg: u8, bg: u8, a: f32) -> u8 {
	(f32::from(fg) * a + f32::from(bg) * (1.0 - a)).round() as u8
}
