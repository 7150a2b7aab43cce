// Views turn ViewModels into output: Display impls for the console, Ratatui
// widgets for the interactive UI.

pub mod tui;
pub mod users;

pub use users::*;
