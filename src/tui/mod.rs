//! Interactive playground built on Ratatui.

pub mod app;
pub mod editor;
pub mod events;
pub mod handler;
pub mod ui;

pub use app::App;
pub use handler::run_tui;
