mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use fsearch::logging;
use settings::LogSettings;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved.log);

	let outcome = SearchWorkflow::from_config(resolved).run()?;
	log::info!(
		"session ended with query {:?}, {} file(s) opened",
		outcome.query,
		outcome.opened.len()
	);
	Ok(())
}

/// Install the file logger. Failure is reported and the search runs without logging.
fn init_logging(settings: &LogSettings) {
	let path = match &settings.file {
		Some(path) => path.clone(),
		None => match logging::default_log_file() {
			Ok(path) => path,
			Err(err) => {
				eprintln!("fsearch: logging disabled: {err:#}");
				return;
			}
		},
	};

	if let Err(err) = logging::initialize(settings.level, &path) {
		eprintln!("fsearch: logging disabled: {err:#}");
	}
}
