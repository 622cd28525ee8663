//! Layered application settings.
//!
//! Defaults are defined in code, an optional `moddex.toml` in the
//! config directory overrides them section by section, and CLI flags
//! win over both. Every engine tunable lives here so the engine itself
//! never reads files or environment.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use config::{Config, File};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;
use crate::engine::animate::AnimationParams;
use crate::engine::layout::ListGeometry;
use crate::engine::scroll::ScrollParams;
use crate::engine::EngineParams;

/// Resolved settings the application runs with.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Y coordinate of the first item, in list units.
	pub start_y: f32,
	/// Item height in list units.
	pub item_height: f32,
	/// Gap between items in list units.
	pub spacing: f32,
	/// Distance past a viewport edge at which items vanish entirely.
	pub fade_margin: f32,
	/// Distance over which edge opacity ramps from solid to gone.
	pub fade_range: f32,
	/// Fraction of the remaining slide distance covered per frame.
	pub easing: f32,
	/// Filter-fade opacity step per frame.
	pub fade_step: f32,
	/// Velocity added per wheel notch.
	pub wheel_step: f32,
	/// Per-frame velocity multiplier.
	pub scroll_decay: f32,
	/// Velocities below this snap to zero.
	pub min_velocity: f32,
	/// Minimum scrollbar thumb height in rows.
	pub min_thumb: f32,
	/// Frame interval in milliseconds.
	pub tick_ms: u64,
	/// Frames per half blink cycle of the query cursor.
	pub blink_frames: u64,
	/// Theme name.
	pub theme: String,
	/// Initial filter query.
	pub initial_query: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			start_y: 0.0,
			item_height: 1.0,
			spacing: 1.0,
			fade_margin: 3.0,
			fade_range: 2.0,
			easing: 0.2,
			fade_step: 15.0,
			wheel_step: 1.0,
			scroll_decay: 0.9,
			min_velocity: 0.05,
			min_thumb: 1.0,
			tick_ms: 16,
			blink_frames: 30,
			theme: "mineshaft".to_string(),
			initial_query: String::new(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	list: ListSection,
	fade: FadeSection,
	scroll: ScrollSection,
	animation: AnimationSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ListSection {
	start_y: Option<f32>,
	item_height: Option<f32>,
	spacing: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FadeSection {
	margin: Option<f32>,
	range: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ScrollSection {
	wheel_step: Option<f32>,
	decay: Option<f32>,
	min_velocity: Option<f32>,
	min_thumb: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AnimationSection {
	easing: Option<f32>,
	fade_step: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	tick_ms: Option<u64>,
	blink_frames: Option<u64>,
	initial_query: Option<String>,
}

impl Settings {
	/// Resolve settings: defaults, then the config file if present,
	/// then CLI overrides. Validates before returning.
	pub fn load(cli: &CliArgs) -> Result<Self> {
		let mut settings = Self::default();

		if let Some(path) = config_file_path()? {
			let raw = read_config_file(&path)
				.with_context(|| format!("failed to load config file {}", path.display()))?;
			settings.apply_file(&raw);
		}

		settings.apply_cli(cli);
		settings.validate()?;
		Ok(settings)
	}

	fn apply_file(&mut self, raw: &RawConfig) {
		apply(&mut self.start_y, raw.list.start_y);
		apply(&mut self.item_height, raw.list.item_height);
		apply(&mut self.spacing, raw.list.spacing);
		apply(&mut self.fade_margin, raw.fade.margin);
		apply(&mut self.fade_range, raw.fade.range);
		apply(&mut self.wheel_step, raw.scroll.wheel_step);
		apply(&mut self.scroll_decay, raw.scroll.decay);
		apply(&mut self.min_velocity, raw.scroll.min_velocity);
		apply(&mut self.min_thumb, raw.scroll.min_thumb);
		apply(&mut self.easing, raw.animation.easing);
		apply(&mut self.fade_step, raw.animation.fade_step);
		apply(&mut self.theme, raw.ui.theme.clone());
		apply(&mut self.tick_ms, raw.ui.tick_ms);
		apply(&mut self.blink_frames, raw.ui.blink_frames);
		apply(&mut self.initial_query, raw.ui.initial_query.clone());
	}

	fn apply_cli(&mut self, cli: &CliArgs) {
		apply(&mut self.theme, cli.theme.clone());
		apply(&mut self.tick_ms, cli.tick);
		apply(&mut self.initial_query, cli.query.clone());
	}

	fn validate(&self) -> Result<()> {
		ensure!(self.item_height > 0.0, "item_height must be positive");
		ensure!(self.spacing >= 0.0, "spacing must not be negative");
		ensure!(self.fade_range > 0.0, "fade range must be positive");
		ensure!(
			self.fade_margin >= 0.0,
			"fade margin must not be negative"
		);
		ensure!(
			self.easing > 0.0 && self.easing <= 1.0,
			"easing must be in (0, 1]"
		);
		ensure!(self.fade_step > 0.0, "fade_step must be positive");
		ensure!(
			self.scroll_decay > 0.0 && self.scroll_decay < 1.0,
			"scroll decay must be in (0, 1)"
		);
		ensure!(self.tick_ms > 0, "tick interval must be positive");
		ensure!(self.blink_frames > 0, "blink_frames must be positive");
		Ok(())
	}

	/// Engine tunables derived from these settings.
	#[must_use]
	pub fn engine_params(&self) -> EngineParams {
		EngineParams {
			geometry: ListGeometry {
				start_y: self.start_y,
				item_height: self.item_height,
				spacing: self.spacing,
			},
			fade_margin: self.fade_margin,
			fade_range: self.fade_range,
			animation: AnimationParams {
				easing: self.easing,
				fade_step: self.fade_step,
			},
			scroll: ScrollParams {
				wheel_step: self.wheel_step,
				decay: self.scroll_decay,
				min_velocity: self.min_velocity,
			},
			blink_frames: self.blink_frames,
		}
	}

	/// Print a human-readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Theme: {}", self.theme);
		println!("  Tick interval: {}ms", self.tick_ms);
		println!(
			"  List geometry: start_y={} item_height={} spacing={}",
			self.start_y, self.item_height, self.spacing
		);
		println!(
			"  Fade: margin={} range={} step={}",
			self.fade_margin, self.fade_range, self.fade_step
		);
		println!(
			"  Scroll: wheel_step={} decay={} min_velocity={}",
			self.wheel_step, self.scroll_decay, self.min_velocity
		);
		println!("  Easing: {}", self.easing);
	}
}

fn apply<T>(slot: &mut T, value: Option<T>) {
	if let Some(value) = value {
		*slot = value;
	}
}

fn config_file_path() -> Result<Option<PathBuf>> {
	let path = app_dirs::config_dir()?.join("moddex.toml");
	Ok(path.is_file().then_some(path))
}

fn read_config_file(path: &std::path::Path) -> Result<RawConfig> {
	let raw = Config::builder()
		.add_source(File::from(path.to_path_buf()))
		.build()?
		.try_deserialize::<RawConfig>()?;
	Ok(raw)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	#[test]
	fn defaults_pass_validation() {
		Settings::default().validate().expect("defaults are valid");
	}

	#[test]
	fn file_sections_override_defaults() {
		let mut file = NamedTempFile::with_suffix(".toml").expect("tempfile");
		write!(
			file,
			"[scroll]\ndecay = 0.8\n\n[animation]\neasing = 0.3\n\n[ui]\ntheme = \"parchment\"\n"
		)
		.expect("write");

		let raw = read_config_file(file.path()).expect("parse");
		let mut settings = Settings::default();
		settings.apply_file(&raw);

		assert_eq!(settings.scroll_decay, 0.8);
		assert_eq!(settings.easing, 0.3);
		assert_eq!(settings.theme, "parchment");
		// Untouched sections keep their defaults.
		assert_eq!(settings.fade_step, 15.0);
		settings.validate().expect("still valid");
	}

	#[test]
	fn out_of_range_values_are_rejected() {
		let mut settings = Settings::default();
		settings.scroll_decay = 1.5;
		assert!(settings.validate().is_err());

		let mut settings = Settings::default();
		settings.easing = 0.0;
		assert!(settings.validate().is_err());

		let mut settings = Settings::default();
		settings.item_height = 0.0;
		assert!(settings.validate().is_err());
	}

	#[test]
	fn engine_params_mirror_the_settings() {
		let settings = Settings::default();
		let params = settings.engine_params();
		assert_eq!(params.geometry.item_height, settings.item_height);
		assert_eq!(params.scroll.decay, settings.scroll_decay);
		assert_eq!(params.animation.fade_step, settings.fade_step);
		assert_eq!(params.blink_frames, settings.blink_frames);
	}
}
