//! Top location bar and bottom key-hint bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// App title plus the current location fragment.
pub struct LocationBarView<'a> {
    fragment: &'a str,
}

impl<'a> LocationBarView<'a> {
    pub fn new(fragment: &'a str) -> Self {
        Self { fragment }
    }
}

impl<'a> Widget for LocationBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                " Aurora People ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.fragment, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// `key description` pairs separated by dots.
pub struct StatusBarView<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> StatusBarView<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, description)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                *description,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
