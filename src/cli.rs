//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Browse a fuzzy-searchable mod list; activating an entry opens a web
/// search for it.
#[derive(Debug, Parser)]
#[command(name = "moddex", version, about)]
pub struct CliArgs {
	/// Newline-delimited file of mod display names.
	#[arg(long, value_name = "FILE")]
	pub names: Option<PathBuf>,

	/// Parallel file of search keys; lines pair with --names
	/// positionally and fall back to the name when missing.
	#[arg(long, value_name = "FILE", requires = "names")]
	pub keys: Option<PathBuf>,

	/// JSON catalog: an array of {"name", "search_key"} objects.
	#[arg(long, value_name = "FILE", conflicts_with_all = ["names", "keys"])]
	pub catalog: Option<PathBuf>,

	/// Initial filter query.
	#[arg(long)]
	pub query: Option<String>,

	/// Color theme.
	#[arg(long, env = "MODDEX_THEME")]
	pub theme: Option<String>,

	/// Frame interval in milliseconds.
	#[arg(long, value_name = "MS")]
	pub tick: Option<u64>,

	/// Print the effective configuration before starting.
	#[arg(long)]
	pub print_config: bool,

	/// List builtin theme names and exit.
	#[arg(long)]
	pub list_themes: bool,
}

/// Parse process arguments.
#[must_use]
pub fn parse() -> CliArgs {
	CliArgs::parse()
}
