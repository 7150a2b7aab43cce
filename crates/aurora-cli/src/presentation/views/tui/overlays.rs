//! Overlays drawn above the page: add-user drawer, confirmation dialog,
//! go-to prompt, and the notification stack.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::form::{FormView, caret_spans};
use super::{centered_rect, severity_to_color};
use crate::presentation::view_models::{FormViewModel, NotificationViewModel};

/// Right-hand panel the drawer occupies inside `area`.
pub fn drawer_area(area: Rect) -> Rect {
    let width = u16::try_from(u32::from(area.width) * 2 / 5)
        .unwrap_or(u16::MAX)
        .max(36)
        .min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

pub struct DrawerView<'a> {
    model: &'a FormViewModel,
}

impl<'a> DrawerView<'a> {
    pub fn new(model: &'a FormViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DrawerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Dim the page behind the panel.
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

        let panel = drawer_area(area);
        Clear.render(panel, buf);

        let block = Block::default()
            .title(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
            .border_type(BorderType::Thick);
        let inner = block.inner(panel);
        block.render(panel, buf);

        FormView::new(self.model)
            .borderless()
            .cancel_label("Cancel")
            .render(inner, buf);
    }
}

pub struct ConfirmView<'a> {
    message: &'a str,
}

impl<'a> ConfirmView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for ConfirmView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = padded_width(self.message, 8).max(30);
        let dialog = centered_rect(area, width, 7);
        Clear.render(dialog, buf);

        let lines = vec![
            Line::default(),
            Line::from(self.message),
            Line::default(),
            Line::from(vec![
                Span::styled("[y] Yes", Style::default().fg(Color::Red)),
                Span::raw("   "),
                Span::styled("[n] No", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Confirm")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .render(dialog, buf);
    }
}

pub struct PromptView<'a> {
    value: &'a str,
    cursor: usize,
}

impl<'a> PromptView<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self { value, cursor }
    }
}

impl<'a> Widget for PromptView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered_rect(area, 50, 5);
        Clear.render(dialog, buf);

        let mut input = vec![Span::raw(" ")];
        input.extend(caret_spans(self.value, self.cursor));

        let lines = vec![
            Line::from(input),
            Line::from(Span::styled(
                " Enter go · Esc cancel",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Go to location")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .render(dialog, buf);
    }
}

/// Toasts stacked in the top-right corner, oldest first.
pub struct NotificationsView<'a> {
    items: &'a [NotificationViewModel],
}

impl<'a> NotificationsView<'a> {
    pub fn new(items: &'a [NotificationViewModel]) -> Self {
        Self { items }
    }
}

impl<'a> Widget for NotificationsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.items.is_empty() {
            return;
        }

        let width = self
            .items
            .iter()
            .map(|n| padded_width(&n.message, 4))
            .max()
            .unwrap_or(0)
            .clamp(20, area.width.max(20))
            .min(area.width);
        let column = Rect::new(area.x + area.width - width, area.y, width, area.height);
        let slots = Layout::vertical(self.items.iter().map(|_| Constraint::Length(3))).split(column);

        for (item, slot) in self.items.iter().zip(slots.iter()) {
            let mut style = Style::default().fg(severity_to_color(item.severity));
            if item.fading {
                style = style.add_modifier(Modifier::DIM);
            }
            Clear.render(*slot, buf);
            Paragraph::new(Line::from(Span::styled(item.message.as_str(), style)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style),
                )
                .render(*slot, buf);
        }
    }
}

/// Column count of `text` plus `pad`, saturating at `u16::MAX`.
fn padded_width(text: &str, pad: u16) -> u16 {
    u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(pad)
}
