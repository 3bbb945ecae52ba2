//! Rust vs Stylus playground: pick an example, edit it, compile and run it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod printer;
pub mod runner;
pub mod tui;
pub mod utils;

pub use catalog::{Example, ExampleKind};
pub use config::Config;
pub use runner::{ExitKind, RunError, RunOutcome, RunPhase, Runner, RunnerSettings};
