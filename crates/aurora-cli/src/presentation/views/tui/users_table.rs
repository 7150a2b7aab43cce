//! Users Table View
//!
//! Renders the directory as a table: position, name, e-mail and the row action.

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::PLACEHOLDER;
use crate::presentation::view_models::UsersListViewModel;

pub struct UsersTableView<'a> {
    model: &'a UsersListViewModel,
}

impl<'a> UsersTableView<'a> {
    pub fn new(model: &'a UsersListViewModel) -> Self {
        Self { model }
    }

    /// Table widget ready for stateful rendering.
    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(["Sr. No", "User name", "E-mail", "Action"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let model = self.model;
        let rows: Vec<Row<'a>> = model
            .rows
            .iter()
            .map(|row| {
                let email = match &row.email {
                    Some(email) => Cell::from(email.as_str()),
                    None => Cell::from(Span::styled(
                        PLACEHOLDER,
                        Style::default().fg(Color::DarkGray),
                    )),
                };
                Row::new(vec![
                    Cell::from(row.position.to_string()),
                    Cell::from(row.name.as_str()),
                    email,
                    Cell::from(Span::styled("View", Style::default().fg(Color::Cyan))),
                ])
            })
            .collect();

        let title = Line::from(vec![
            Span::styled("Users", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("[+ Add user]", Style::default().fg(Color::Green)),
        ]);

        Table::new(
            rows,
            [
                Constraint::Length(7),
                Constraint::Percentage(35),
                Constraint::Percentage(45),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
    }
}
