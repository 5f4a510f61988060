use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::systems::search::{LineStyle, ResultView, StyledLine};
use crate::tui::theme::Theme;

/// Marker drawn after the highlighted result.
pub const DEFAULT_SELECTED_MARKER: &str = " <-----------";

/// Scrollable list of result lines, fed by the search pipeline.
#[derive(Debug, Clone)]
pub struct ResultPane {
	lines: Vec<StyledLine>,
	offset: usize,
	height: usize,
	marker: String,
}

impl Default for ResultPane {
	fn default() -> Self {
		Self::new(DEFAULT_SELECTED_MARKER)
	}
}

impl ResultPane {
	#[must_use]
	pub fn new(marker: impl Into<String>) -> Self {
		Self {
			lines: Vec::new(),
			offset: 0,
			height: 0,
			marker: marker.into(),
		}
	}

	#[must_use]
	pub fn lines(&self) -> &[StyledLine] {
		&self.lines
	}

	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Record the number of rows available, as learnt from the last layout.
	pub fn set_viewport_height(&mut self, height: usize) {
		self.height = height;
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		self.set_viewport_height(usize::from(area.height));
		let visible: Vec<Line> = self
			.lines
			.iter()
			.skip(self.offset)
			.take(self.height)
			.map(|line| self.styled(line, theme))
			.collect();
		frame.render_widget(Paragraph::new(visible), area);
	}

	fn styled<'l>(&'l self, line: &'l StyledLine, theme: &Theme) -> Line<'l> {
		match line.style {
			LineStyle::Plain => Line::raw(line.text.as_str()),
			LineStyle::Selected => Line::from(vec![
				Span::styled(line.text.as_str(), theme.selected),
				Span::styled(self.marker.as_str(), theme.selected),
			]),
			LineStyle::Error => Line::styled(line.text.as_str(), theme.error),
		}
	}
}

impl ResultView for ResultPane {
	fn clear(&mut self) {
		self.lines.clear();
		self.offset = 0;
	}

	fn append_line(&mut self, text: &str, style: LineStyle) {
		self.lines.push(StyledLine::new(text, style));
	}

	fn set_full_text(&mut self, lines: Vec<StyledLine>) {
		self.lines = lines;
		self.offset = self.offset.min(self.lines.len().saturating_sub(1));
	}

	fn viewport_height(&self) -> usize {
		self.height
	}

	fn scroll_to(&mut self, offset: usize) {
		self.offset = offset;
	}
}
