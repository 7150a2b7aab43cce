//! Aurora People: a terminal directory of user profiles.
//!
//! One JSON collection in a key-value store, a users list with an add-user
//! drawer, and a tabbed profile editor. See [`presentation`] for how screens
//! are built and [`app::App`] for the event handling.

mod args;
mod commands;
mod handlers;

pub mod app;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod notifications;
pub mod presentation;
pub mod router;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
