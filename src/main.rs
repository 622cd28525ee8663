use anyhow::Result;
use moddex::actions::WebSearchHandler;
use moddex::catalog::{self, ModEntry};
use moddex::cli::{self, CliArgs};
use moddex::{Settings, app_dirs, logging, tui};

fn main() -> Result<()> {
	let cli = cli::parse();

	if cli.list_themes {
		for name in tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let settings = Settings::load(&cli)?;

	if cli.print_config {
		settings.print_summary();
	}

	logging::init(&app_dirs::state_dir()?)?;

	let entries = load_catalog(&cli)?;
	tui::run(entries, settings, WebSearchHandler::default())
}

/// Resolve the item source. No source at all is fine: the UI runs over
/// an empty list.
fn load_catalog(cli: &CliArgs) -> Result<Vec<ModEntry>> {
	let entries = if let Some(path) = &cli.catalog {
		catalog::from_json(path)?
	} else if let Some(names) = &cli.names {
		catalog::from_names(names, cli.keys.as_deref())?
	} else {
		Vec::new()
	};
	Ok(entries)
}
