//! Form View
//!
//! Renders a labelled field list with the caret on the focused text field.
//! Scrolls so the focused field stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{FieldDisplay, FieldViewModel, FormViewModel};

pub struct FormView<'a> {
    model: &'a FormViewModel,
    cancel_label: Option<&'a str>,
    bordered: bool,
}

impl<'a> FormView<'a> {
    pub fn new(model: &'a FormViewModel) -> Self {
        Self {
            model,
            cancel_label: None,
            bordered: true,
        }
    }

    pub fn cancel_label(mut self, label: &'a str) -> Self {
        self.cancel_label = Some(label);
        self
    }

    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }

    /// All form lines plus the index of the focused field's first line.
    fn lines(&self) -> (Vec<Line<'a>>, usize) {
        let model = self.model;
        let mut lines = Vec::new();
        let mut focus_line = 0;

        for field in &model.fields {
            if field.focused {
                focus_line = lines.len();
            }
            let label_style = if field.focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            lines.push(Line::from(Span::styled(field.label.as_str(), label_style)));
            lines.extend(value_lines(field));
            lines.push(Line::default());
        }

        let mut buttons = Vec::new();
        if let Some(cancel) = self.cancel_label {
            buttons.push(Span::styled(
                format!("[ {} ]", cancel),
                Style::default().fg(Color::DarkGray),
            ));
            buttons.push(Span::raw("  "));
        }
        buttons.push(Span::styled(
            format!("[ {} ]", model.submit_label),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(buttons));

        (lines, focus_line)
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if self.bordered {
            let block = Block::default()
                .title(self.model.title.as_str())
                .borders(Borders::ALL);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let (lines, focus_line) = self.lines();
        // Keep the focused label and a few lines of its value in view.
        let visible = inner.height as usize;
        let offset = (focus_line + 4).saturating_sub(visible);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

fn value_lines(field: &FieldViewModel) -> Vec<Line<'static>> {
    let indent = Span::raw("  ");

    if field.display == FieldDisplay::Choice {
        let style = if field.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        return vec![Line::from(vec![
            indent,
            Span::styled(format!("‹ {} ›", field.value), style),
        ])];
    }

    if field.value.is_empty() && field.cursor.is_none() {
        return vec![Line::from(vec![
            indent,
            Span::styled(
                field.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ])];
    }

    let mut start = 0;
    let mut caret_placed = false;
    field
        .value
        .split('\n')
        .map(|text| {
            let len = text.chars().count();
            let mut spans = vec![indent.clone()];
            match field.cursor {
                Some(cursor) if !caret_placed && cursor >= start && cursor <= start + len => {
                    caret_placed = true;
                    spans.extend(caret_spans(text, cursor - start));
                }
                _ => spans.push(Span::raw(text.to_string())),
            }
            start += len + 1;
            Line::from(spans)
        })
        .collect()
}

/// `text` split around a reverse-video caret at char index `cursor`.
pub(crate) fn caret_spans(text: &str, cursor: usize) -> Vec<Span<'static>> {
    let before: String = text.chars().take(cursor).collect();
    let at: String = text
        .chars()
        .nth(cursor)
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = text.chars().skip(cursor + 1).collect();

    vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]
}
