use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use crate::tui::components::{PromptContext, StatusState, render_prompt_row};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, results_area] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

		let label = self.status_label();
		render_prompt_row(
			frame,
			PromptContext {
				search_input: &self.search_input,
				prompt: &self.ui.prompt,
				area: prompt_area,
				theme: &self.theme,
			},
			StatusState {
				label: &label,
				scanning: self.controller.is_scanning(),
				throbber_state: &self.throbber_state,
			},
		);
		self.pane.render(frame, results_area, &self.theme);
	}
}
