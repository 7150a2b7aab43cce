use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::views::tui::NotFoundView;

/// Fallback page for a profile route whose record is gone.
pub struct NotFoundComponent;

impl NotFoundComponent {
    /// `true` when the key activates "Back to Users".
    pub fn handle_input(&self, key: KeyEvent) -> bool {
        matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b')
        )
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(NotFoundView, area);
    }
}
