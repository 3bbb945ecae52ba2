//! Custom event types for TUI application.

use crossterm::event::KeyEvent;

use crate::runner::{RunError, RunOutcome, RunPhase};

/// Events that can occur in the TUI application
#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal was resized; only triggers a redraw
    Resize,
    /// The run in flight moved to another phase
    RunPhase(RunPhase),
    /// The run in flight finished
    RunFinished(Result<RunOutcome, RunError>),
}
