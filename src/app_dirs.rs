//! Resolve configuration and state directories for `moddex`.
//!
//! The helpers in this module respect environment overrides while
//! falling back to platform-appropriate locations provided by the
//! `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "moddex";
const APPLICATION: &str = "moddex";

const CONFIG_DIR_ENV: &str = "MODDEX_CONFIG_DIR";
const STATE_DIR_ENV: &str = "MODDEX_STATE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for moddex"))
}

/// Resolve an override directory from an environment variable. An empty
/// value is treated the same as an unset one.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding the optional `moddex.toml` configuration file.
pub fn config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding runtime state such as the log file.
pub fn state_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(STATE_DIR_ENV) {
		return Ok(dir);
	}

	let dirs = project_dirs()?;
	Ok(dirs
		.state_dir()
		.unwrap_or_else(|| dirs.data_local_dir())
		.to_path_buf())
}
