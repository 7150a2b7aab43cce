//! "Go to" prompt: lets the user type a location fragment by hand.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use super::text_input::TextInput;
use crate::presentation::views::tui::PromptView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Go(String),
    Cancel,
}

pub struct GoToPrompt {
    input: TextInput,
}

impl GoToPrompt {
    /// Starts pre-filled with the current location.
    pub fn new(current: &str) -> Self {
        Self {
            input: TextInput::new(current),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<PromptAction> {
        match key.code {
            KeyCode::Esc => Some(PromptAction::Cancel),
            KeyCode::Enter => Some(PromptAction::Go(self.input.value().trim().to_string())),
            _ => {
                self.input.handle_input(key);
                None
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(
            PromptView::new(self.input.value(), self.input.cursor()),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_edit_and_go() {
        let mut prompt = GoToPrompt::new("#/users");
        for c in "/u3 ".chars() {
            prompt.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(
            prompt.handle_input(key(KeyCode::Enter)),
            Some(PromptAction::Go("#/users/u3".to_string()))
        );
    }

    #[test]
    fn test_cancel() {
        let mut prompt = GoToPrompt::new("");
        assert_eq!(prompt.handle_input(key(KeyCode::Esc)), Some(PromptAction::Cancel));
    }
}
