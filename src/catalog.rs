//! Mod catalog loading.
//!
//! The catalog is the ordered item source: one entry per mod, pairing
//! the display name with the opaque search key handed to the action
//! handler on activation. Two on-disk shapes are supported: a
//! newline-delimited names file with an optional parallel keys file,
//! and a JSON array of `{"name", "search_key"}` objects.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEntry {
	/// Display name shown in the list.
	pub name: String,
	/// Key used to build the web search when activated.
	pub search_key: String,
}

/// Errors raised while loading a catalog the user pointed at.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog file {path}")]
	Io {
		path: String,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse JSON catalog {path}")]
	Json {
		path: String,
		#[source]
		source: serde_json::Error,
	},
}

#[derive(Debug, Deserialize)]
struct RawEntry {
	name: String,
	#[serde(default)]
	search_key: Option<String>,
}

/// Load entries from a names file, one display name per line.
///
/// Blank name lines are skipped. When `keys` is given it is zipped with
/// the names positionally; a blank key line holds its position and
/// falls back to the name for that entry, and a short keys file is not
/// an error.
pub fn from_names(names: &Path, keys: Option<&Path>) -> Result<Vec<ModEntry>, CatalogError> {
	let names: Vec<String> = read_lines(names)?
		.into_iter()
		.filter(|line| !line.is_empty())
		.collect();
	let keys = match keys {
		Some(path) => read_lines(path)?,
		None => Vec::new(),
	};

	Ok(names
		.into_iter()
		.enumerate()
		.map(|(i, name)| {
			let search_key = keys
				.get(i)
				.filter(|key| !key.is_empty())
				.cloned()
				.unwrap_or_else(|| name.clone());
			ModEntry { name, search_key }
		})
		.collect())
}

/// Load entries from a JSON catalog: an array of objects with a `name`
/// and an optional `search_key`.
pub fn from_json(path: &Path) -> Result<Vec<ModEntry>, CatalogError> {
	let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
		path: path.display().to_string(),
		source,
	})?;
	let entries: Vec<RawEntry> = serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
		path: path.display().to_string(),
		source,
	})?;

	Ok(entries
		.into_iter()
		.map(|entry| {
			let search_key = entry
				.search_key
				.filter(|key| !key.trim().is_empty())
				.unwrap_or_else(|| entry.name.clone());
			ModEntry {
				name: entry.name,
				search_key,
			}
		})
		.collect())
}

fn read_lines(path: &Path) -> Result<Vec<String>, CatalogError> {
	let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
		path: path.display().to_string(),
		source,
	})?;
	Ok(raw.lines().map(str::trim).map(str::to_string).collect())
}
