use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `fsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "fsearch",
	version,
	long_version = long_version(),
	about = "Incremental file-name search that streams matches while you type",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long,
		value_name = "PATH",
		help = "Directory to search below (default: current directory)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TEXT",
		help = "Label shown before the query (default: Search)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		short = 'H',
		long = "hidden",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Include hidden files (default: enabled)"
	)]
	pub(crate) hidden: Option<bool>,
	#[arg(
		short = 's',
		long = "follow-symlinks",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Follow symbolic links while scanning (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		long = "respect-ignore",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Respect .ignore files (default: disabled)"
	)]
	pub(crate) respect_ignore_files: Option<bool>,
	#[arg(
		long = "git-ignore",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Respect .gitignore, global gitignore and git exclude files (default: disabled)"
	)]
	pub(crate) git_ignore: Option<bool>,
	#[arg(
		short = 'i',
		long = "ignore-case",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Match file names case-insensitively (default: disabled)"
	)]
	pub(crate) ignore_case: Option<bool>,
	#[arg(
		short = 'j',
		long,
		value_name = "NUM",
		help = "Limit the number of walker threads per scan (default: automatic)"
	)]
	pub(crate) threads: Option<usize>,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		long = "global-ignores",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated names that are never descended into or reported (default: none)"
	)]
	pub(crate) global_ignores: Option<Vec<String>>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Wait this long after the last keystroke before scanning (default: 0)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "One of off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write the log here (default: fsearch.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
}
