//! Profile page views: header card, tab strip, and the not-found fallback.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use super::PLACEHOLDER;
use crate::presentation::view_models::{ProfileHeaderViewModel, Tab};

pub struct ProfileHeaderView<'a> {
    model: &'a ProfileHeaderViewModel,
}

impl<'a> ProfileHeaderView<'a> {
    pub fn new(model: &'a ProfileHeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileHeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let email = self.model.email.as_deref().unwrap_or(PLACEHOLDER);
        let phone = self.model.phone.as_deref().unwrap_or(PLACEHOLDER);

        let lines = vec![
            Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    self.model.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("✉️  "),
                Span::raw(email),
                Span::styled("  (Ctrl-E copy)", dim),
            ]),
            Line::from(vec![
                Span::raw("📞 "),
                Span::raw(phone),
                Span::styled("  (Ctrl-P copy)", dim),
            ]),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

/// Section tabs followed by the back control.
pub struct TabStripView {
    active: Tab,
}

impl TabStripView {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabStripView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
        titles.push(Line::from(Span::styled(
            "← Back",
            Style::default().fg(Color::DarkGray),
        )));

        Tabs::new(titles)
            .select(self.active.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│")
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

pub struct NotFoundView;

impl Widget for NotFoundView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from("User not found."),
            Line::default(),
            Line::from(Span::styled(
                "[ Back to Users ]",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
