//! Drawing the engine's frame output into the terminal.
//!
//! The renderer is deliberately dumb: it takes the positions and
//! opacities the engine computed, quantizes the vertical units to rows,
//! and blends colors to stand in for alpha. All interaction logic stays
//! in the engine.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::catalog::ModEntry;
use crate::engine::event::{FrameOutput, QueryFrame};
use crate::engine::scroll::TrackGeometry;
use crate::engine::Viewport;

/// Screen regions carved out of the terminal each frame.
#[derive(Debug, Clone, Copy)]
pub struct Areas {
	pub query: Rect,
	pub list: Rect,
	pub track: Rect,
	pub footer: Rect,
}

/// Split the terminal into the query line, the list body with its
/// scrollbar column, and a one-row footer.
#[must_use]
pub fn screen_areas(area: Rect) -> Areas {
	let [query, body, footer] = Layout::vertical([
		Constraint::Length(3),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area);
	let [list, track] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(body);

	Areas {
		query,
		list,
		track,
		footer,
	}
}

/// Engine viewport matching the current screen areas.
#[must_use]
pub fn viewport_for(areas: Areas, min_thumb: f32) -> Viewport {
	Viewport {
		top: f32::from(areas.list.y),
		bottom: f32::from(areas.list.y) + f32::from(areas.list.height),
		list_x: f32::from(areas.list.x),
		list_width: f32::from(areas.list.width),
		track: TrackGeometry {
			x: f32::from(areas.track.x),
			y: f32::from(areas.track.y),
			width: f32::from(areas.track.width),
			height: f32::from(areas.track.height),
			min_thumb,
		},
	}
}

/// Paint one frame.
pub fn draw(
	frame: &mut Frame,
	out: &FrameOutput,
	entries: &[ModEntry],
	areas: Areas,
	theme: super::theme::Theme,
) {
	let background = Block::default().style(Style::default().bg(theme.background));
	frame.render_widget(background, frame.area());

	draw_query(frame, &out.query, areas.query, theme);
	draw_items(frame, out, entries, areas.list, theme);
	draw_scrollbar(frame, out, areas.track, theme);
	draw_footer(frame, out, entries.len(), areas.footer, theme);
}

fn draw_query(frame: &mut Frame, query: &QueryFrame, area: Rect, theme: super::theme::Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(Style::default().fg(theme.border_fg))
		.title(" search ");
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let line = query_line(query, theme);
	frame.render_widget(Paragraph::new(line), inner);
}

/// Build the styled query line: selection reversed, cursor blinking.
fn query_line(query: &QueryFrame, theme: super::theme::Theme) -> Line<'static> {
	let chars: Vec<char> = query.text.chars().collect();
	let (sel_start, sel_end) = query.selection;
	let base = Style::default().fg(theme.query_fg);
	let selected = Style::default().fg(theme.query_fg).bg(theme.selection_bg);
	let cursor_style = base.add_modifier(Modifier::REVERSED);

	let mut spans = vec![Span::styled("> ", Style::default().fg(theme.hint_fg))];
	for (i, c) in chars.iter().enumerate() {
		let mut style = if i >= sel_start && i < sel_end {
			selected
		} else {
			base
		};
		if query.cursor_visible && i == query.cursor && sel_start == sel_end {
			style = cursor_style;
		}
		spans.push(Span::styled(c.to_string(), style));
	}

	// Cursor sitting past the last character renders as a block.
	if query.cursor_visible && query.cursor >= chars.len() && sel_start == sel_end {
		spans.push(Span::styled(" ", cursor_style));
	}

	Line::from(spans)
}

fn draw_items(
	frame: &mut Frame,
	out: &FrameOutput,
	entries: &[ModEntry],
	area: Rect,
	theme: super::theme::Theme,
) {
	for item in &out.items {
		if !item.visible {
			continue;
		}
		let Some(entry) = entries.get(item.id) else {
			continue;
		};

		let row = item.y.round() as i32;
		if row < i32::from(area.y) || row >= i32::from(area.y) + i32::from(area.height) {
			continue;
		}

		let fg = super::theme::blend(theme.item_fg, theme.background, item.opacity);
		let mut style = Style::default().fg(fg);
		if item.hovered {
			style = style.bg(theme.item_hover_bg);
		}

		let text = fit_to_width(&format!("  {}", entry.name), usize::from(area.width));

		let rect = Rect {
			x: area.x,
			y: row as u16,
			width: area.width,
			height: 1,
		};
		frame.render_widget(Paragraph::new(text).style(style), rect);
	}
}

/// Clip `text` to `width` terminal columns, ending wide overflow with
/// an ellipsis. Column-aware: a double-width character never straddles
/// the cut.
fn fit_to_width(text: &str, width: usize) -> String {
	if width == 0 {
		return String::new();
	}
	if text.width() <= width {
		return text.to_string();
	}
	let (slice, _) = text.unicode_truncate(width - 1);
	let mut fitted = slice.to_string();
	fitted.push('…');
	fitted
}

fn draw_scrollbar(frame: &mut Frame, out: &FrameOutput, area: Rect, theme: super::theme::Theme) {
	if area.height == 0 {
		return;
	}

	let thumb_top = out.thumb.y.round() as i32;
	let thumb_bottom = (out.thumb.y + out.thumb.height).round() as i32;

	for row in area.y..area.y + area.height {
		let inside = i32::from(row) >= thumb_top && i32::from(row) < thumb_bottom;
		let (symbol, fg) = if inside {
			("█", theme.thumb_fg)
		} else {
			("│", theme.track_fg)
		};
		let rect = Rect {
			x: area.x,
			y: row,
			width: 1,
			height: 1,
		};
		frame.render_widget(
			Paragraph::new(symbol).style(Style::default().fg(fg)),
			rect,
		);
	}
}

fn draw_footer(
	frame: &mut Frame,
	out: &FrameOutput,
	total: usize,
	area: Rect,
	theme: super::theme::Theme,
) {
	let text = format!(
		" {}/{} mods · enter opens a web search · esc quits",
		out.match_count, total
	);
	frame.render_widget(
		Paragraph::new(text).style(Style::default().fg(theme.hint_fg)),
		area,
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::theme;

	#[test]
	fn screen_areas_stack_and_leave_a_scrollbar_column() {
		let areas = screen_areas(Rect::new(0, 0, 80, 30));
		assert_eq!(areas.query.height, 3);
		assert_eq!(areas.footer.height, 1);
		assert_eq!(areas.track.width, 1);
		assert_eq!(areas.list.width + areas.track.width, 80);
		assert_eq!(areas.list.y, 3);
		assert_eq!(areas.list.height, 26);
	}

	#[test]
	fn viewport_mirrors_the_list_area() {
		let areas = screen_areas(Rect::new(0, 0, 80, 30));
		let viewport = viewport_for(areas, 1.0);
		assert_eq!(viewport.top, 3.0);
		assert_eq!(viewport.bottom, 29.0);
		assert_eq!(viewport.height(), 26.0);
		assert_eq!(viewport.track.x, 79.0);
		assert_eq!(viewport.track.min_thumb, 1.0);
	}

	#[test]
	fn fit_to_width_leaves_short_text_alone() {
		assert_eq!(fit_to_width("  Grass Overhaul", 40), "  Grass Overhaul");
	}

	#[test]
	fn fit_to_width_clips_on_column_boundaries() {
		let fitted = fit_to_width("  模组管理器工具", 8);
		assert!(fitted.width() <= 8, "{fitted:?} is wider than 8 columns");
		assert!(fitted.ends_with('…'));
		assert_eq!(fitted, "  模组…");
	}

	#[test]
	fn fit_to_width_handles_a_zero_width_area() {
		assert_eq!(fit_to_width("  Alpha", 0), "");
	}

	#[test]
	fn query_line_places_the_cursor_block() {
		let query = QueryFrame {
			text: "ab".to_string(),
			cursor: 2,
			selection: (2, 2),
			cursor_visible: true,
		};
		let line = query_line(&query, theme::default_theme());
		// Prompt, two characters, trailing cursor block.
		assert_eq!(line.spans.len(), 4);
		assert_eq!(line.spans[3].content, " ");
	}

	#[test]
	fn query_line_styles_the_selection() {
		let query = QueryFrame {
			text: "abcd".to_string(),
			cursor: 4,
			selection: (1, 3),
			cursor_visible: false,
		};
		let t = theme::default_theme();
		let line = query_line(&query, t);
		assert_eq!(line.spans[2].style.bg, Some(t.selection_bg));
		assert_eq!(line.spans[3].style.bg, Some(t.selection_bg));
		assert_eq!(line.spans[4].style.bg, None);
	}
}
