//! Presentation Layer
//!
//! ```text
//! Handler → Presenter → ViewModel → View
//!                                    ↑
//!                       Component (UI state + input → Action)
//! ```
//!
//! - **Presenters** are pure functions from domain records to ViewModels.
//! - **ViewModels** are raw, serializable data. No colors, no layout.
//! - **Views** render ViewModels: `Display` for the console, Ratatui widgets for the TUI.
//! - **Components** own UI-only state (selection, focus, caret, active tab),
//!   interpret keys, and emit Actions. UI actions stay inside the component;
//!   domain actions (save, delete, navigate) go up to the [`App`](crate::app::App).
//! - **Renderers** own the terminal and run the event loop.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
