//! Short-lived status messages.
//!
//! Each message is fully visible for `ttl`, then marked fading for `fade`,
//! then dropped on the next tick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::presentation::view_models::{NotificationViewModel, Severity};

#[derive(Debug, Clone)]
struct Notification {
    message: String,
    severity: Severity,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
    fade: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration, fade: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
            fade,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.items.push_back(Notification {
            message: message.into(),
            severity,
            shown_at: now,
        });
    }

    /// Drop everything past `ttl + fade`.
    pub fn tick(&mut self, now: Instant) {
        let lifetime = self.ttl + self.fade;
        self.items
            .retain(|n| now.saturating_duration_since(n.shown_at) < lifetime);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<(&str, Severity)> {
        self.items
            .back()
            .map(|n| (n.message.as_str(), n.severity))
    }

    pub fn view_models(&self, now: Instant) -> Vec<NotificationViewModel> {
        self.items
            .iter()
            .map(|n| NotificationViewModel {
                message: n.message.clone(),
                severity: n.severity,
                fading: now.saturating_duration_since(n.shown_at) >= self.ttl,
            })
            .collect()
    }
}
