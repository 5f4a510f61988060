use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line query editor.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			style: Style::default(),
		};
		input.set_text(initial);
		input
	}

	/// Feed a key press to the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.replace(['\r', '\n'], "");
		self.textarea = TextArea::new(vec![single_line]);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.set_style(self.style);
		self.textarea.move_cursor(tui_textarea::CursorMove::End);
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
