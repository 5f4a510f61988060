use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::systems::search::ConfirmOutcome;

/// Whether the event loop should keep running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
	Continue,
	Exit,
}

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Esc => return Flow::Exit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Flow::Exit;
			}
			KeyCode::Enter => self.confirm_selection(),
			KeyCode::Up => {
				self.controller.move_up(&mut self.pane);
			}
			KeyCode::Down => {
				self.controller.move_down(&mut self.pane);
			}
			_ => {
				if self.search_input.input(key) {
					self.query_changed();
				}
			}
		}
		Flow::Continue
	}

	fn confirm_selection(&mut self) {
		match self
			.controller
			.confirm(self.launcher.as_ref(), &mut self.pane)
		{
			ConfirmOutcome::Opened(path) => {
				// Results and selection stay; only the editor is emptied.
				self.search_input.set_text("");
				self.opened.push(path);
			}
			ConfirmOutcome::Failed(_) | ConfirmOutcome::Ignored => {}
		}
	}
}
