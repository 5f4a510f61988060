use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::actions::Flow;
use super::{App, SearchUi, UiConfig};
use crate::launcher::testing::RecordingLauncher;

fn fixture(names: &[&str]) -> tempfile::TempDir {
	let dir = tempfile::tempdir().unwrap();
	for name in names {
		let path = dir.path().join(name);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(path, b"").unwrap();
	}
	dir
}

fn app_for(root: &Path, ui: UiConfig, launcher: RecordingLauncher) -> App<'static> {
	SearchUi::new(root)
		.with_ui_config(ui)
		.with_launcher(Box::new(launcher))
		.build()
}

fn press(app: &mut App<'_>, code: KeyCode) -> Flow {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while Instant::now() < deadline {
		app.pump_results();
		if app.controller.scans_in_flight() == 0 && !app.controller.is_scanning() {
			break;
		}
		thread::sleep(Duration::from_millis(5));
	}
	app.pump_results();
}

fn render(app: &mut App<'_>) -> Vec<String> {
	let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	let buffer = terminal.backend().buffer();
	(0..buffer.area.height)
		.map(|y| {
			(0..buffer.area.width)
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
				.trim_end()
				.to_string()
		})
		.collect()
}

#[test]
fn typing_streams_matches_into_the_pane() {
	let dir = fixture(&["report.txt", "report_final.txt", "readme.md"]);
	let mut app = app_for(dir.path(), UiConfig::default(), RecordingLauncher::default());

	type_text(&mut app, "report");
	settle(&mut app);
	let rows = render(&mut app);

	assert!(rows[0].starts_with(" Search > report"));
	assert!(rows[0].ends_with("2 matches"));
	let listed: Vec<&str> = rows[1..].iter().map(|row| row.trim()).filter(|row| !row.is_empty()).collect();
	assert_eq!(listed.len(), 2);
	assert!(listed.contains(&"report.txt"));
	assert!(listed.contains(&"report_final.txt"));
}

#[test]
fn initial_query_is_scanned_at_startup() {
	let dir = fixture(&["alpha.txt", "beta.txt"]);
	let ui = UiConfig::default().with_initial_query("alpha");
	let mut app = app_for(dir.path(), ui, RecordingLauncher::default());

	settle(&mut app);
	assert_eq!(app.controller.result_count(), 1);
	assert_eq!(app.search_input.text(), "alpha");
}

#[test]
fn down_then_enter_opens_the_highlighted_file() {
	let dir = fixture(&["notes/todo.md"]);
	let mut app = app_for(dir.path(), UiConfig::default(), RecordingLauncher::default());

	type_text(&mut app, "todo");
	settle(&mut app);
	press(&mut app, KeyCode::Down);
	let rows = render(&mut app);
	assert_eq!(rows[1].trim(), "notes/todo.md <-----------");

	assert_eq!(press(&mut app, KeyCode::Enter), Flow::Continue);
	assert_eq!(app.search_input.text(), "");
	assert_eq!(app.controller.result_count(), 1);

	let outcome = app.into_outcome();
	assert_eq!(outcome.opened, vec![dir.path().join("notes/todo.md")]);
}

#[test]
fn enter_without_selection_does_nothing() {
	let dir = fixture(&["a.txt"]);
	let mut app = app_for(dir.path(), UiConfig::default(), RecordingLauncher::default());

	type_text(&mut app, "a");
	settle(&mut app);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.search_input.text(), "a");
	assert!(app.opened.is_empty());
}

#[test]
fn failed_open_is_shown_in_the_pane() {
	let dir = fixture(&["a.txt"]);
	let launcher = RecordingLauncher {
		fail: true,
		..RecordingLauncher::default()
	};
	let mut app = app_for(dir.path(), UiConfig::default(), launcher);

	type_text(&mut app, "a");
	settle(&mut app);
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);

	let rows = render(&mut app);
	assert!(rows[1].trim_start().starts_with("Error opening file:"));
	assert_eq!(app.search_input.text(), "a");
	assert!(app.opened.is_empty());
}

#[test]
fn escape_and_ctrl_c_exit() {
	let dir = fixture(&[]);
	let mut app = app_for(dir.path(), UiConfig::default(), RecordingLauncher::default());

	assert_eq!(press(&mut app, KeyCode::Esc), Flow::Exit);
	let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
	assert_eq!(app.handle_key(ctrl_c), Flow::Exit);
	assert_eq!(app.search_input.text(), "");
}

#[test]
fn debounced_edit_resets_now_and_scans_later() {
	let dir = fixture(&["a.txt", "ab.txt"]);
	let ui = UiConfig::default().with_debounce(Duration::from_millis(200));
	let mut app = app_for(dir.path(), ui, RecordingLauncher::default());

	type_text(&mut app, "a");
	let before = app.controller.generation();
	app.launch_due_scan(Instant::now() + Duration::from_secs(1));
	settle(&mut app);
	assert_eq!(app.controller.result_count(), 2);

	press(&mut app, KeyCode::Char('b'));
	assert_eq!(app.controller.generation(), before + 1);
	assert_eq!(app.controller.result_count(), 0);
	assert!(app.pane.lines().is_empty());
	assert!(app.controller.is_scanning());
	assert_eq!(app.controller.scans_in_flight(), 0);

	app.launch_due_scan(Instant::now());
	assert!(app.pending_launch.is_some());

	app.launch_due_scan(Instant::now() + Duration::from_secs(1));
	assert!(app.pending_launch.is_none());
	settle(&mut app);
	assert_eq!(app.controller.result_count(), 1);
	assert_eq!(app.status_label(), "1 match");
}
