use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub prompt: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the prompt row.
pub struct StatusState<'a> {
	pub label: &'a str,
	pub scanning: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `prompt > input` with the status label right-aligned on the same row.
pub fn render_prompt_row(frame: &mut Frame, input: PromptContext<'_>, status: StatusState<'_>) {
	let PromptContext {
		search_input,
		prompt,
		area,
		theme,
	} = input;

	let input_area = if prompt.is_empty() {
		area
	} else {
		let [prompt_area, input_area] =
			Layout::horizontal([Constraint::Length(prompt_width(prompt)), Constraint::Min(1)])
				.areas(area);
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt);
		frame.render_widget(prompt_widget, prompt_area);
		input_area
	};

	search_input.render(frame, input_area);
	render_status(frame, input_area, status, theme);
}

fn prompt_width(prompt: &str) -> u16 {
	u16::try_from(prompt.width().saturating_add(3)).unwrap_or(u16::MAX)
}

fn render_status(frame: &mut Frame, area: Rect, status: StatusState<'_>, theme: &Theme) {
	let StatusState {
		label,
		scanning,
		throbber_state,
	} = status;
	if area.width == 0 || area.height == 0 || label.is_empty() {
		return;
	}

	let muted = theme.status;
	let mut line = Line::default();
	if scanning {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(label.to_string(), muted));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep two columns between the typed query and the status.
	let row = area.top();
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn draw(input: &SearchInput<'_>, label: &str, width: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
		let throbber_state = ThrobberState::default();
		terminal
			.draw(|frame| {
				render_prompt_row(
					frame,
					PromptContext {
						search_input: input,
						prompt: "Search",
						area: frame.area(),
						theme: &Theme::default(),
					},
					StatusState {
						label,
						scanning: false,
						throbber_state: &throbber_state,
					},
				);
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		(0..width).map(|x| buffer[(x, 0)].symbol()).collect()
	}

	#[test]
	fn prompt_query_and_status_share_the_row() {
		let input = SearchInput::new("report");
		let row = draw(&input, "2 matches", 40);
		assert!(row.starts_with("Search > report"));
		assert!(row.trim_end().ends_with("2 matches"));
	}

	#[test]
	fn status_never_overwrites_the_query() {
		let input = SearchInput::new("a-rather-long-query");
		let row = draw(&input, "12 matches", 32);
		assert!(row.starts_with("Search > a-rather-long-query"));
		assert!(!row.contains("matches"));
	}
}
