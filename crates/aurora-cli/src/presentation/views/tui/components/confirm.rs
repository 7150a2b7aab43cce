//! Yes/no confirmation dialog.

use aurora_types::UserId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::views::tui::ConfirmView;

/// What runs when the dialog is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteUser(UserId),
}

pub struct ConfirmDialog {
    message: String,
    pending: PendingAction,
}

impl ConfirmDialog {
    pub fn new(message: impl Into<String>, pending: PendingAction) -> Self {
        Self {
            message: message.into(),
            pending,
        }
    }

    pub fn into_pending(self) -> PendingAction {
        self.pending
    }

    /// `Some(true)` to confirm, `Some(false)` to abort, `None` to keep asking.
    pub fn handle_input(&self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(ConfirmView::new(&self.message), area);
    }
}
