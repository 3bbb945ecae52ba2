//! Headless command handlers (no TUI).

pub mod list;
pub mod run;
