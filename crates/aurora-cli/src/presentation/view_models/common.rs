use serde::Serialize;

/// Notification severity tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Ok,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationViewModel {
    pub message: String,
    pub severity: Severity,
    /// Past its display time and about to be removed.
    pub fading: bool,
}
