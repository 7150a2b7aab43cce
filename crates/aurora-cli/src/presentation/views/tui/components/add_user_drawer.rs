//! Add User Drawer Component
//!
//! Three-field form in a side panel. Submitting hands the draft to the app,
//! which validates it; on failure the drawer stays open with its input.

use aurora_types::NewUser;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use super::form::{FieldId, FormComponent, FormField};
use crate::presentation::view_models::FormViewModel;
use crate::presentation::views::tui::DrawerView;
use crate::presentation::views::tui::overlays::drawer_area;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerAction {
    Submit(NewUser),
    Cancel,
}

pub struct AddUserDrawer {
    form: FormComponent,
    /// Panel area from the last frame, for backdrop clicks.
    panel: Option<Rect>,
}

impl AddUserDrawer {
    pub fn new() -> Self {
        Self {
            form: FormComponent::new(vec![
                FormField::text(FieldId::Name, "Name of the user", ""),
                FormField::text(FieldId::Email, "E-mail", ""),
                FormField::text(FieldId::Contact, "Contact", ""),
            ]),
            panel: None,
        }
    }

    pub fn draft(&self) -> NewUser {
        NewUser::new(
            self.form.value(FieldId::Name),
            self.form.value(FieldId::Email),
            self.form.value(FieldId::Contact),
        )
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DrawerAction> {
        match key.code {
            KeyCode::Esc => Some(DrawerAction::Cancel),
            KeyCode::Enter => Some(DrawerAction::Submit(self.draft())),
            _ => {
                self.form.handle_input(key);
                None
            }
        }
    }

    /// `true` when a click at (`column`, `row`) lands on the backdrop.
    pub fn is_backdrop(&self, column: u16, row: u16) -> bool {
        match self.panel {
            Some(panel) => !panel.contains((column, row).into()),
            None => false,
        }
    }

    pub fn view_model(&self) -> FormViewModel {
        self.form.view_model("Add User", "Add")
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.panel = Some(drawer_area(area));
        let model = self.view_model();
        f.render_widget(DrawerView::new(&model), area);
    }
}

impl Default for AddUserDrawer {
    fn default() -> Self {
        Self::new()
    }
}
