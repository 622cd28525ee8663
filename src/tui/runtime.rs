//! Application runtime and event loop.
//!
//! One logical thread owns every piece of engine state. A helper thread
//! only polls the terminal for input and forwards raw events over a
//! channel; each frame the loop drains that channel, translates events
//! for the engine, ticks it once, dispatches signals, and draws.

use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
	KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use tracing::{debug, info};

use crate::actions::ActionHandler;
use crate::catalog::ModEntry;
use crate::engine::editor::EditCommand;
use crate::engine::event::{EngineSignal, InputEvent};
use crate::engine::ListEngine;
use crate::settings::Settings;

use super::render;
use super::theme;

/// Run the application until the user exits.
pub fn run(
	entries: Vec<ModEntry>,
	settings: Settings,
	handler: impl ActionHandler,
) -> Result<()> {
	let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
	let mut engine = ListEngine::new(&names, &settings.initial_query, settings.engine_params());
	let theme = theme::by_name(&settings.theme).unwrap_or_else(theme::default_theme);
	info!(mods = entries.len(), "starting ui");

	let mut terminal = ratatui::init();
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;

	let (event_tx, event_rx) = mpsc::channel();
	let input_running = Arc::new(AtomicBool::new(true));
	let input_flag = Arc::clone(&input_running);

	let input_thread = thread::spawn(move || -> Result<()> {
		while input_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(10))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let tick = Duration::from_millis(settings.tick_ms);
	let mut frame_events: Vec<InputEvent> = Vec::new();

	let result: Result<()> = 'frame_loop: loop {
		frame_events.clear();
		let mut accept = false;
		loop {
			match event_rx.try_recv() {
				Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
					match translate_key(key) {
						KeyAction::Quit => break 'frame_loop Ok(()),
						KeyAction::Accept => accept = true,
						KeyAction::Engine(event) => frame_events.push(event),
						KeyAction::None => {}
					}
				}
				Ok(Event::Mouse(mouse)) => {
					if let Some(event) = translate_mouse(mouse) {
						frame_events.push(event);
					}
				}
				Ok(Event::FocusLost) => frame_events.push(InputEvent::FocusLost),
				Ok(_) => {}
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'frame_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		let areas = render::screen_areas(terminal.get_frame().area());
		let viewport = render::viewport_for(areas, settings.min_thumb);
		let out = engine.tick(&frame_events, viewport);

		if accept
			&& let Some(id) = engine.first_visible_match()
			&& let Some(entry) = entries.get(id)
		{
			handler.activate(entry);
		}

		for signal in &out.signals {
			match *signal {
				EngineSignal::Activated(id) => {
					if let Some(entry) = entries.get(id) {
						handler.activate(entry);
					}
				}
				EngineSignal::HoverChanged(id) => {
					handler.hover_changed(id.and_then(|id| entries.get(id)));
				}
				EngineSignal::QueryChanged => {
					debug!(query = engine.query(), matches = out.match_count, "filtered");
				}
				EngineSignal::FocusLost => debug!("focus lost"),
			}
		}

		// Break instead of returning so the terminal is restored below
		// even when drawing fails.
		if let Err(err) = terminal.draw(|frame| render::draw(frame, &out, &entries, areas, theme)) {
			break 'frame_loop Err(err.into());
		}

		thread::sleep(tick);
	};

	ratatui::restore();
	execute!(stdout(), DisableMouseCapture)?;

	input_running.store(false, Ordering::Relaxed);
	match input_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}

enum KeyAction {
	Quit,
	/// Activate the topmost visible match (Enter).
	Accept,
	Engine(InputEvent),
	None,
}

fn translate_key(key: KeyEvent) -> KeyAction {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	let shift = key.modifiers.contains(KeyModifiers::SHIFT);

	let command = match key.code {
		KeyCode::Esc => return KeyAction::Quit,
		KeyCode::Enter => return KeyAction::Accept,
		KeyCode::Char('a') if ctrl => EditCommand::SelectAll,
		KeyCode::Char('z') if ctrl => EditCommand::Undo,
		KeyCode::Left if shift => EditCommand::ExtendLeft,
		KeyCode::Right if shift => EditCommand::ExtendRight,
		KeyCode::Left => EditCommand::MoveLeft,
		KeyCode::Right => EditCommand::MoveRight,
		KeyCode::Backspace => EditCommand::Backspace,
		KeyCode::Char(c) if !ctrl => EditCommand::Insert(c),
		_ => return KeyAction::None,
	};
	KeyAction::Engine(InputEvent::Edit(command))
}

fn translate_mouse(mouse: MouseEvent) -> Option<InputEvent> {
	let x = f32::from(mouse.column);
	let y = f32::from(mouse.row);
	match mouse.kind {
		MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
			Some(InputEvent::PointerMove { x, y })
		}
		MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { x, y }),
		MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp),
		MouseEventKind::ScrollUp => Some(InputEvent::Wheel { notches: -1.0 }),
		MouseEventKind::ScrollDown => Some(InputEvent::Wheel { notches: 1.0 }),
		_ => None,
	}
}
