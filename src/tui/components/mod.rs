pub mod prompt;
pub mod results;

pub use prompt::{PromptContext, StatusState, render_prompt_row};
pub use results::{DEFAULT_SELECTED_MARKER, ResultPane};
