use std::sync::mpsc::Sender;

use crate::streams::{DataStream, StreamEnvelope, ViewAction, ViewTarget};

/// How a line in the result list should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
	Plain,
	Selected,
	Error,
}

/// A line of text handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
	pub text: String,
	pub style: LineStyle,
}

impl StyledLine {
	pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
		Self {
			text: text.into(),
			style,
		}
	}
}

/// Rendering surface driven by the search pipeline.
pub trait ResultView {
	/// Remove every line.
	fn clear(&mut self);

	/// Add one line at the bottom.
	fn append_line(&mut self, text: &str, style: LineStyle);

	/// Replace the whole contents.
	fn set_full_text(&mut self, lines: Vec<StyledLine>);

	/// Number of rows currently visible; 0 before the first layout.
	fn viewport_height(&self) -> usize;

	/// Make row `offset` the first visible row.
	fn scroll_to(&mut self, offset: usize);
}

pub struct PaneTarget;

impl ViewTarget for PaneTarget {
	type View<'target> = dyn ResultView + 'target;
}

pub type PaneAction = ViewAction<PaneTarget>;
pub type PaneEnvelope = StreamEnvelope<PaneAction>;

/// Producer handle the aggregator uses to update the result view.
pub struct PaneStream<'a> {
	inner: DataStream<'a, PaneAction>,
}

impl<'a> PaneStream<'a> {
	#[must_use]
	pub fn new(tx: &'a Sender<PaneEnvelope>, generation: u64) -> Self {
		Self {
			inner: DataStream::new(tx, generation),
		}
	}

	fn send_with(
		&self,
		handler: impl for<'view> FnOnce(&'view mut (dyn ResultView + 'view)) + Send + 'static,
		complete: bool,
	) -> bool {
		self.inner.send(PaneAction::new(handler), complete)
	}

	/// Append one freshly accepted match.
	pub fn append(&self, path: String) -> bool {
		self.send_with(move |view| view.append_line(&path, LineStyle::Plain), false)
	}

	/// Show a scan failure as a single error line.
	pub fn error(&self, message: String) -> bool {
		self.send_with(
			move |view| view.append_line(&format!("Error: {message}"), LineStyle::Error),
			false,
		)
	}

	/// Signal that the scan for this generation has finished.
	pub fn finished(&self) -> bool {
		self.send_with(|_view| {}, true)
	}
}

/// Build the full list for a re-render, marking the selected row.
#[must_use]
pub fn render_lines(results: &[String], selected: Option<usize>) -> Vec<StyledLine> {
	results
		.iter()
		.enumerate()
		.map(|(index, path)| {
			let style = if Some(index) == selected {
				LineStyle::Selected
			} else {
				LineStyle::Plain
			};
			StyledLine::new(path.as_str(), style)
		})
		.collect()
}

/// In-memory [`ResultView`] used by tests to observe what the pipeline renders.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
	pub lines: Vec<StyledLine>,
	pub height: usize,
	pub offset: usize,
	pub clears: usize,
	pub full_renders: usize,
}

#[cfg(test)]
impl RecordingView {
	pub fn texts(&self) -> Vec<&str> {
		self.lines.iter().map(|line| line.text.as_str()).collect()
	}
}

#[cfg(test)]
impl ResultView for RecordingView {
	fn clear(&mut self) {
		self.clears += 1;
		self.lines.clear();
		self.offset = 0;
	}

	fn append_line(&mut self, text: &str, style: LineStyle) {
		self.lines.push(StyledLine::new(text, style));
	}

	fn set_full_text(&mut self, lines: Vec<StyledLine>) {
		self.full_renders += 1;
		self.lines = lines;
	}

	fn viewport_height(&self) -> usize {
		self.height
	}

	fn scroll_to(&mut self, offset: usize) {
		self.offset = offset;
	}
}
