//! Form Component
//!
//! A vertical list of labelled fields with one focused field. Owns the
//! editing state; parents decide what Enter/Ctrl-S mean.

use crossterm::event::{KeyCode, KeyEvent};

use super::text_input::TextInput;
use crate::presentation::view_models::{FieldDisplay, FieldViewModel, FormViewModel};

/// Every field any form in the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Add user
    Name,
    Contact,
    // Basic
    FirstName,
    LastName,
    Email,
    YearOfBirth,
    Gender,
    Phone,
    AltPhone,
    Address,
    Pincode,
    DomicileState,
    DomicileCountry,
    // Education
    School,
    Degree,
    Course,
    CompletionYear,
    Grade,
    Skills,
    Projects,
    // Experience
    Domain1,
    Years1,
    Sub1,
    Domain2,
    Years2,
    Sub2,
    LinkedIn,
    Resume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldKind {
    Text(TextInput),
    TextArea(TextInput),
    Choice {
        options: Vec<ChoiceOption>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    id: FieldId,
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
}

impl FormField {
    pub fn text(id: FieldId, label: &'static str, value: &str) -> Self {
        Self {
            id,
            label,
            placeholder: "",
            kind: FieldKind::Text(TextInput::new(value)),
        }
    }

    pub fn textarea(id: FieldId, label: &'static str, value: &str) -> Self {
        Self {
            id,
            label,
            placeholder: "",
            kind: FieldKind::TextArea(TextInput::new(value).multiline()),
        }
    }

    /// A choice pre-selected on the option whose value equals `value`,
    /// falling back to the first option.
    pub fn choice(
        id: FieldId,
        label: &'static str,
        options: Vec<ChoiceOption>,
        value: &str,
    ) -> Self {
        let selected = options.iter().position(|o| o.value == value).unwrap_or(0);
        Self {
            id,
            label,
            placeholder: "",
            kind: FieldKind::Choice { options, selected },
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Current raw value (the option value for choices).
    pub fn value(&self) -> &str {
        match &self.kind {
            FieldKind::Text(input) | FieldKind::TextArea(input) => input.value(),
            FieldKind::Choice { options, selected } => options
                .get(*selected)
                .map(|o| o.value.as_str())
                .unwrap_or(""),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        match &mut self.kind {
            FieldKind::Text(input) | FieldKind::TextArea(input) => input.handle_input(key),
            FieldKind::Choice { options, selected } => {
                if options.is_empty() {
                    return false;
                }
                match key.code {
                    KeyCode::Right | KeyCode::Char(' ') => {
                        *selected = (*selected + 1) % options.len();
                        true
                    }
                    KeyCode::Left => {
                        *selected = (*selected + options.len() - 1) % options.len();
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    fn view_model(&self, focused: bool) -> FieldViewModel {
        let (display, value, cursor) = match &self.kind {
            FieldKind::Text(input) => (
                FieldDisplay::Text,
                input.value().to_string(),
                Some(input.cursor()),
            ),
            FieldKind::TextArea(input) => (
                FieldDisplay::TextArea,
                input.value().to_string(),
                Some(input.cursor()),
            ),
            FieldKind::Choice { options, selected } => (
                FieldDisplay::Choice,
                options
                    .get(*selected)
                    .map(|o| o.label.clone())
                    .unwrap_or_default(),
                None,
            ),
        };

        FieldViewModel {
            label: self.label.to_string(),
            value,
            placeholder: self.placeholder.to_string(),
            display,
            focused,
            cursor: if focused { cursor } else { None },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormComponent {
    fields: Vec<FormField>,
    focus: usize,
}

impl FormComponent {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.fields.get(self.focus).map(|f| f.id)
    }

    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = self.fields.iter().position(|f| f.id == id) {
            self.focus = index;
        }
    }

    /// Raw value of a field, `""` if the form has no such field.
    pub fn value(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value())
            .unwrap_or("")
    }

    pub fn trimmed(&self, id: FieldId) -> String {
        self.value(id).trim().to_string()
    }

    /// Focus movement, choice cycling, and text editing.
    ///
    /// Enter moves to the next field unless the focused field is multi-line.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                true
            }
            _ => {
                let Some(field) = self.fields.get_mut(self.focus) else {
                    return false;
                };
                if field.handle_input(key) {
                    return true;
                }
                if key.code == KeyCode::Enter {
                    self.focus_next();
                    return true;
                }
                false
            }
        }
    }

    pub fn view_model(&self, title: &str, submit_label: &str) -> FormViewModel {
        FormViewModel {
            title: title.to_string(),
            fields: self
                .fields
                .iter()
                .enumerate()
                .map(|(i, f)| f.view_model(i == self.focus))
                .collect(),
            submit_label: submit_label.to_string(),
        }
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample() -> FormComponent {
        FormComponent::new(vec![
            FormField::text(FieldId::FirstName, "First name", "Gr"),
            FormField::choice(
                FieldId::Gender,
                "Gender",
                vec![
                    ChoiceOption::new("", "Select an option"),
                    ChoiceOption::new("female", "Female"),
                ],
                "",
            ),
            FormField::textarea(FieldId::Address, "Address", ""),
        ])
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = sample();
        form.handle_input(key(KeyCode::Char('a')));
        assert_eq!(form.value(FieldId::FirstName), "Gra");
        assert_eq!(form.value(FieldId::Address), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = sample();
        form.handle_input(key(KeyCode::BackTab));
        assert_eq!(form.focused(), Some(FieldId::Address));
        form.handle_input(key(KeyCode::Tab));
        assert_eq!(form.focused(), Some(FieldId::FirstName));
    }

    #[test]
    fn test_choice_cycles() {
        let mut form = sample();
        form.focus(FieldId::Gender);
        form.handle_input(key(KeyCode::Right));
        assert_eq!(form.value(FieldId::Gender), "female");
        form.handle_input(key(KeyCode::Right));
        assert_eq!(form.value(FieldId::Gender), "");
        form.handle_input(key(KeyCode::Left));
        assert_eq!(form.value(FieldId::Gender), "female");
    }

    #[test]
    fn test_choice_preselects_matching_value() {
        let field = FormField::choice(
            FieldId::Gender,
            "Gender",
            vec![ChoiceOption::new("", "-"), ChoiceOption::new("other", "Other")],
            "other",
        );
        assert_eq!(field.value(), "other");

        let fallback = FormField::choice(
            FieldId::Years1,
            "Experience",
            vec![ChoiceOption::new("a", "A"), ChoiceOption::new("b", "B")],
            "zzz",
        );
        assert_eq!(fallback.value(), "a");
    }

    #[test]
    fn test_enter_advances_or_breaks_line() {
        let mut form = sample();
        form.handle_input(key(KeyCode::Enter));
        assert_eq!(form.focused(), Some(FieldId::Gender));

        form.focus(FieldId::Address);
        form.handle_input(key(KeyCode::Char('x')));
        form.handle_input(key(KeyCode::Enter));
        assert_eq!(form.focused(), Some(FieldId::Address));
        assert_eq!(form.value(FieldId::Address), "x\n");
    }

    #[test]
    fn test_missing_field_reads_empty() {
        assert_eq!(sample().value(FieldId::Resume), "");
    }

    #[test]
    fn test_view_model_marks_focus() {
        let vm = sample().view_model("Basic Details", "Save basic info");
        assert!(vm.fields[0].focused);
        assert_eq!(vm.fields[0].cursor, Some(2));
        assert!(!vm.fields[1].focused);
        assert_eq!(vm.fields[1].value, "Select an option");
        assert_eq!(vm.fields[2].display, FieldDisplay::TextArea);
    }
}
