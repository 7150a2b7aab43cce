use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewModel {
    pub title: String,
    pub fields: Vec<FieldViewModel>,
    pub submit_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDisplay {
    Text,
    TextArea,
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViewModel {
    pub label: String,
    /// Raw input, or the selected option's label for choices.
    pub value: String,
    pub placeholder: String,
    pub display: FieldDisplay,
    pub focused: bool,
    /// Caret position in chars, only for a focused text field.
    pub cursor: Option<usize>,
}
