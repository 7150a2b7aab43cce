mod context;

pub mod list;
pub mod reset;
pub mod ui;

pub use context::HandlerContext;
