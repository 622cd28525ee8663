//! File-backed logging setup.
//!
//! The TUI owns the terminal, so log output goes to `moddex.log` in the
//! state directory instead of stderr. The `MODDEX_LOG` environment
//! variable controls the filter (default `info`).

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MODDEX_LOG";
const LOG_FILE: &str = "moddex.log";

/// Initialize the global subscriber. Call once, before the terminal is
/// taken over.
pub fn init(state_dir: &Path) -> Result<()> {
	fs::create_dir_all(state_dir)
		.with_context(|| format!("failed to create state directory {}", state_dir.display()))?;
	let path = state_dir.join(LOG_FILE);
	let file = fs::File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Arc::new(file))
		.with_ansi(false)
		.init();

	Ok(())
}
