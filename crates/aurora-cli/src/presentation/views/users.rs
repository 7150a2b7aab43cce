use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::UsersListViewModel;

use super::tui::PLACEHOLDER;

// --------------------------------------------------------
// Users List View (console)
// --------------------------------------------------------

pub struct UsersListTextView<'a> {
    data: &'a UsersListViewModel,
    color: bool,
}

impl<'a> UsersListTextView<'a> {
    pub fn new(data: &'a UsersListViewModel) -> Self {
        Self { data, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl<'a> fmt::Display for UsersListTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.rows.is_empty() {
            return writeln!(f, "No users.");
        }

        let name_width = self
            .data
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("USER NAME".len());

        writeln!(f, "{:<6} {:<name_width$} E-MAIL", "SR.NO", "USER NAME")?;

        for row in &self.data.rows {
            let email = row.email.as_deref().unwrap_or(PLACEHOLDER);
            let name = format!("{:<name_width$}", row.name);
            if self.color {
                writeln!(
                    f,
                    "{:<6} {} {}  {}",
                    row.position,
                    name.bold(),
                    email.cyan(),
                    row.id.bright_black()
                )?;
            } else {
                writeln!(f, "{:<6} {} {}  {}", row.position, name, email, row.id)?;
            }
        }
        Ok(())
    }
}
