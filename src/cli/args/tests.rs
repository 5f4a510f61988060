use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::CliArgs;

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_everything_to_the_config_layers() {
	let parsed = CliArgs::try_parse_from(["fsearch"]).unwrap();
	assert!(parsed.config.is_empty());
	assert!(!parsed.no_config);
	assert_eq!(parsed.root, None);
	assert_eq!(parsed.hidden, None);
	assert_eq!(parsed.debounce_ms, None);
	assert!(!parsed.print_config);
}

#[test]
fn boolean_flags_accept_bare_and_explicit_forms() {
	let parsed =
		CliArgs::try_parse_from(["fsearch", "--ignore-case", "--hidden", "no", "--git-ignore=yes"])
			.unwrap();
	assert_eq!(parsed.ignore_case, Some(true));
	assert_eq!(parsed.hidden, Some(false));
	assert_eq!(parsed.git_ignore, Some(true));
}

#[test]
fn config_files_accumulate() {
	let parsed = CliArgs::try_parse_from(["fsearch", "-c", "a.toml", "--config", "b.toml"]).unwrap();
	assert_eq!(parsed.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
}

#[test]
fn global_ignores_split_on_commas() {
	let parsed = CliArgs::try_parse_from(["fsearch", "--global-ignores", ".git,target"]).unwrap();
	assert_eq!(
		parsed.global_ignores,
		Some(vec![".git".to_string(), "target".to_string()])
	);
}
