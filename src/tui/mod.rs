//! Terminal building blocks: the query editor, the result pane, the prompt
//! row and the colour theme.

pub mod components;
pub mod input;
pub mod theme;

pub use components::{DEFAULT_SELECTED_MARKER, ResultPane};
pub use input::SearchInput;
pub use theme::{Theme, parse_color};
