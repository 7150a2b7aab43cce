//! TUI Views and Stateful Components
//!
//! This module contains:
//! 1. **Views**: Stateless Ratatui Widget implementations (users table, profile, forms, overlays)
//! 2. **Components**: Stateful components that own UI state, handle input and emit actions
//!
//! ## Design Principles:
//!
//! ### Views (Stateless):
//! - Take a reference to a ViewModel (no ownership)
//! - No domain logic; only map ViewModel data to Ratatui widgets
//! - Color mapping from Severity to Ratatui colors happens here
//!
//! ### Components (Stateful):
//! - Encapsulate UI state (TableState, focus, caret, active tab)
//! - Handle keyboard input
//! - Perform index safety checks
//! - Delegate rendering to Views
//! - Emit actions to the app for navigation and persistence

pub mod components;
pub mod form;
pub mod overlays;
pub mod profile;
pub mod status_bar;
pub mod users_table;

pub use form::FormView;
pub use overlays::{ConfirmView, DrawerView, NotificationsView, PromptView};
pub use profile::{NotFoundView, ProfileHeaderView, TabStripView};
pub use status_bar::{LocationBarView, StatusBarView};
pub use users_table::UsersTableView;

use crate::presentation::view_models::Severity;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

/// Shown wherever an optional value is missing.
pub const PLACEHOLDER: &str = "—";

pub(crate) fn severity_to_color(severity: Severity) -> Color {
    match severity {
        Severity::Default => Color::Cyan,
        Severity::Ok => Color::Green,
        Severity::Danger => Color::Red,
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
