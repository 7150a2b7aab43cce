//! Profile Component (Page-level)
//!
//! Header card, tab strip and the active section form. Tab state lives here
//! and starts at Basic every time the component is built.

use aurora_types::User;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::sections::SectionForm;
use super::{is_alt_chord, is_ctrl_chord};
use crate::presentation::presenters::build_profile_header;
use crate::presentation::view_models::{ProfileHeaderViewModel, Tab};
use crate::presentation::views::tui::{FormView, ProfileHeaderView, TabStripView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Back,
    /// Text to put on the clipboard; never empty.
    Copy(String),
    /// The record with `tab`'s section applied, ready to upsert. Hand it
    /// back through [`ProfileComponent::commit`] once it is stored.
    Save { tab: Tab, user: User },
}

pub struct ProfileComponent {
    user: User,
    header: ProfileHeaderViewModel,
    section: SectionForm,
}

impl ProfileComponent {
    pub fn new(user: User) -> Self {
        let header = build_profile_header(&user);
        let section = SectionForm::for_tab(Tab::default(), &user);
        Self {
            user,
            header,
            section,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.section.tab()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Switch tabs, discarding unsaved edits of the current one.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.section.tab() {
            self.section = SectionForm::for_tab(tab, &self.user);
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ProfileAction> {
        if is_ctrl_chord(&key) {
            return match key.code {
                KeyCode::Char('s') => Some(self.save()),
                KeyCode::Char('e') => copy_action(&self.user.email),
                KeyCode::Char('p') => copy_action(&self.user.phone),
                KeyCode::Right => {
                    self.select_tab(self.active_tab().next());
                    None
                }
                KeyCode::Left => {
                    self.select_tab(self.active_tab().previous());
                    None
                }
                _ => None,
            };
        }

        if is_alt_chord(&key)
            && let KeyCode::Char(c @ '1'..='3') = key.code
        {
            let index = c as usize - '1' as usize;
            self.select_tab(Tab::ALL[index]);
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(ProfileAction::Back),
            KeyCode::F(n @ 1..=3) => {
                self.select_tab(Tab::ALL[n as usize - 1]);
                None
            }
            _ => {
                self.section.handle_input(key);
                None
            }
        }
    }

    /// Adopt a record that was stored; later saves build on it.
    pub fn commit(&mut self, user: User) {
        self.user = user;
    }

    fn save(&self) -> ProfileAction {
        let mut user = self.user.clone();
        self.section.apply(&mut user);
        ProfileAction::Save {
            tab: self.section.tab(),
            user,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let [header, tabs, body] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        f.render_widget(ProfileHeaderView::new(&self.header), header);
        f.render_widget(TabStripView::new(self.section.tab()), tabs);

        let model = self.section.view_model();
        f.render_widget(FormView::new(&model), body);
    }
}

fn copy_action(value: &str) -> Option<ProfileAction> {
    if value.is_empty() {
        None
    } else {
        Some(ProfileAction::Copy(value.to_string()))
    }
}
