//! Users List Component (Page-level)
//!
//! Owns the table selection. Emits actions for view, delete and add; the
//! app performs them.

use aurora_types::UserId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use super::is_ctrl_chord;
use crate::presentation::view_models::{UserRowViewModel, UsersListViewModel};
use crate::presentation::views::tui::UsersTableView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersListAction {
    View(UserId),
    Delete { id: UserId, name: String },
    Add,
    GoTo,
    Quit,
}

pub struct UsersListComponent {
    model: UsersListViewModel,
    state: TableState,
}

impl UsersListComponent {
    pub fn new(model: UsersListViewModel) -> Self {
        let mut state = TableState::default();
        if !model.rows.is_empty() {
            state.select(Some(0));
        }
        Self { model, state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<UsersListAction> {
        if is_ctrl_chord(&key) {
            return None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Home => {
                if !self.model.rows.is_empty() {
                    self.state.select(Some(0));
                }
                None
            }
            KeyCode::End => {
                if !self.model.rows.is_empty() {
                    self.state.select(Some(self.model.rows.len() - 1));
                }
                None
            }
            KeyCode::Enter | KeyCode::Char('v') => self
                .selected_row()
                .map(|row| UsersListAction::View(row.id.clone())),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_row().map(|row| UsersListAction::Delete {
                    id: row.id.clone(),
                    name: row.name.clone(),
                })
            }
            KeyCode::Char('a') | KeyCode::Char('+') => Some(UsersListAction::Add),
            KeyCode::Char('g') => Some(UsersListAction::GoTo),
            KeyCode::Char('q') => Some(UsersListAction::Quit),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let item_count = self.model.rows.len();

        // Index Safety: Clamp selection to data bounds
        match self.state.selected() {
            Some(selected) if selected >= item_count => {
                self.state
                    .select(if item_count == 0 { None } else { Some(item_count - 1) });
            }
            None if item_count > 0 => self.state.select(Some(0)),
            _ => {}
        }

        let table = UsersTableView::new(&self.model).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn selected_row(&self) -> Option<&UserRowViewModel> {
        self.state.selected().and_then(|i| self.model.rows.get(i))
    }

    fn next(&mut self) {
        let len = self.model.rows.len();
        if len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.model.rows.is_empty() {
            return;
        }
        let previous = self
            .state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.state.select(Some(previous));
    }
}
