//! Core crate exports for building and running the `moddex` terminal
//! interface.
//!
//! The interesting machinery lives in [`engine`]: a frame-driven
//! list-filtering-and-layout engine that owns the filter query, the
//! scroll state, and the animated position/opacity of every list entry.
//! Everything else is the thin shell a terminal application needs
//! around it: catalog loading, settings, logging, and a ratatui
//! renderer.

pub mod actions;
pub mod app_dirs;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod logging;
pub mod settings;
pub mod tui;

pub use actions::{ActionHandler, WebSearchHandler};
pub use catalog::ModEntry;
pub use cli::CliArgs;
pub use engine::{EngineParams, FrameOutput, InputEvent, ListEngine, Viewport};
pub use settings::Settings;
pub use tui::run;
