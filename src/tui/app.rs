//! TUI application state management.

use crate::catalog::{self, Example};
use crate::runner::{RunError, RunOutcome, RunPhase};

use super::editor::EditorBuffer;

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Selector,
    Editor,
    RunButton,
    /// The code/output panes of the last run
    Output,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Selector => Focus::Editor,
            Focus::Editor => Focus::RunButton,
            Focus::RunButton => Focus::Output,
            Focus::Output => Focus::Selector,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Selector => Focus::Output,
            Focus::Editor => Focus::Selector,
            Focus::RunButton => Focus::Editor,
            Focus::Output => Focus::RunButton,
        }
    }
}

/// Which result pane the scroll keys move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPane {
    Code,
    Output,
}

/// Idle -> Compiling -> Executing -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Compiling,
    Executing,
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Compiling => "Compiling…",
            RunState::Executing => "Executing…",
        }
    }
}

/// The code that was run together with what came out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub code: String,
    pub output: String,
    pub success: bool,
}

/// Application state for the TUI
#[derive(Debug)]
pub struct App {
    /// Index of the example loaded into the editor
    pub selected: usize,
    /// Index under the selector cursor
    pub highlighted: usize,
    /// The editable buffer
    pub editor: EditorBuffer,
    pub focus: Focus,
    pub run_state: RunState,
    /// Source snapshot of the run in flight
    pending_code: Option<String>,
    /// Result of the most recent finished run
    pub last_run: Option<RunReport>,
    pub status_message: String,
    pub show_help: bool,
    pub show_explanation: bool,
    pub active_pane: ResultPane,
    /// First visible row of the "Code Content" pane
    pub code_scroll: usize,
    /// First visible row of the "Code Output" pane
    pub output_scroll: usize,
}

impl App {
    /// Create the app with `initial` selected; unknown names select the first example.
    pub fn new(initial: &str) -> Self {
        let mut app = Self {
            selected: 0,
            highlighted: 0,
            editor: EditorBuffer::new(),
            focus: Focus::Selector,
            run_state: RunState::Idle,
            pending_code: None,
            last_run: None,
            status_message: String::new(),
            show_help: false,
            show_explanation: true,
            active_pane: ResultPane::Output,
            code_scroll: 0,
            output_scroll: 0,
        };
        let index = catalog::position(initial).unwrap_or_else(|| {
            log::warn!("unknown example '{initial}', using the first one");
            0
        });
        app.select_example(index);
        app
    }

    pub fn selected_example(&self) -> &'static Example {
        &catalog::all()[self.selected]
    }

    /// Load an example into the editor, discarding the current buffer.
    pub fn select_example(&mut self, index: usize) {
        let examples = catalog::all();
        let index = index.min(examples.len() - 1);
        let example = &examples[index];
        self.selected = index;
        self.highlighted = index;
        self.editor.set_text(example.source());
        self.status_message = format!("Loaded {}", example.file);
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn highlight_next(&mut self) {
        if self.highlighted + 1 < catalog::all().len() {
            self.highlighted += 1;
        }
    }

    /// Load the highlighted example and move focus to the editor.
    pub fn confirm_highlight(&mut self) {
        self.select_example(self.highlighted);
        self.focus = Focus::Editor;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn switch_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ResultPane::Code => ResultPane::Output,
            ResultPane::Output => ResultPane::Code,
        };
    }

    fn active_scroll(&mut self) -> &mut usize {
        match self.active_pane {
            ResultPane::Code => &mut self.code_scroll,
            ResultPane::Output => &mut self.output_scroll,
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        let offset = self.active_scroll();
        *offset = offset.saturating_sub(rows);
    }

    /// The renderer clamps the offset to the pane's last page.
    pub fn scroll_down(&mut self, rows: usize) {
        let offset = self.active_scroll();
        *offset = offset.saturating_add(rows);
    }

    pub fn scroll_to_top(&mut self) {
        *self.active_scroll() = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        *self.active_scroll() = usize::MAX;
    }

    pub fn is_busy(&self) -> bool {
        self.run_state != RunState::Idle
    }

    /// Snapshot the buffer for a new run. Returns `None` while a run is in flight.
    pub fn begin_run(&mut self) -> Option<String> {
        if self.is_busy() {
            self.status_message = "A run is already in progress".to_string();
            return None;
        }
        let code = self.editor.text();
        self.pending_code = Some(code.clone());
        self.run_state = RunState::Compiling;
        self.status_message = format!("Running {}", self.selected_example().file);
        Some(code)
    }

    pub fn set_phase(&mut self, phase: RunPhase) {
        if !self.is_busy() {
            return;
        }
        self.run_state = match phase {
            RunPhase::Compiling => RunState::Compiling,
            RunPhase::Executing => RunState::Executing,
        };
    }

    pub fn finish_run(&mut self, result: Result<RunOutcome, RunError>) {
        let code = self.pending_code.take().unwrap_or_default();
        let report = match result {
            Ok(outcome) => {
                self.status_message = outcome.summary();
                RunReport {
                    code,
                    output: outcome.render(),
                    success: outcome.is_success(),
                }
            }
            Err(e) => {
                self.status_message = "Run could not be started".to_string();
                RunReport {
                    code,
                    output: e.to_string(),
                    success: false,
                }
            }
        };
        self.last_run = Some(report);
        self.code_scroll = 0;
        self.output_scroll = 0;
        self.run_state = RunState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_loads_initial_example() {
        let app = App::new("Variable binding");
        assert_eq!(app.selected_example().file, "variable.rs");
        assert_eq!(app.editor.text(), catalog::source_for("Variable binding"));
        assert_eq!(app.run_state, RunState::Idle);
        assert!(app.last_run.is_none());
    }

    #[test]
    fn test_unknown_initial_falls_back_to_first() {
        let app = App::new("nope");
        assert_eq!(app.selected, 0);
        assert_eq!(app.editor.text(), catalog::all()[0].source());
    }

    #[test]
    fn test_selecting_replaces_buffer_without_residue() {
        let mut app = App::new("Hello world!");
        app.editor.insert_str("// my edits\n");
        app.select_example(4);
        assert_eq!(app.editor.text(), catalog::all()[4].source());
        assert!(!app.editor.text().contains("my edits"));
    }

    #[test]
    fn test_highlight_and_confirm() {
        let mut app = App::new("Hello world!");
        app.highlight_prev();
        assert_eq!(app.highlighted, 0);
        for _ in 0..20 {
            app.highlight_next();
        }
        assert_eq!(app.highlighted, catalog::all().len() - 1);
        assert_eq!(app.selected, 0, "highlighting alone does not load");
        app.confirm_highlight();
        assert_eq!(app.selected, catalog::all().len() - 1);
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = App::new("Hello world!");
        app.focus_next();
        assert_eq!(app.focus, Focus::Editor);
        app.focus_next();
        assert_eq!(app.focus, Focus::RunButton);
        app.focus_next();
        assert_eq!(app.focus, Focus::Output);
        app.focus_next();
        assert_eq!(app.focus, Focus::Selector);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn test_pane_scrolling() {
        let mut app = App::new("Hello world!");
        assert_eq!(app.active_pane, ResultPane::Output);
        app.scroll_down(3);
        app.scroll_up(1);
        assert_eq!(app.output_scroll, 2);
        assert_eq!(app.code_scroll, 0);

        app.switch_pane();
        app.scroll_to_bottom();
        assert_eq!(app.code_scroll, usize::MAX);
        app.scroll_down(5);
        assert_eq!(app.code_scroll, usize::MAX);
        app.scroll_to_top();
        app.scroll_up(4);
        assert_eq!(app.code_scroll, 0);

        // A new result starts both panes at the top
        app.scroll_to_bottom();
        app.begin_run();
        app.finish_run(Ok(RunOutcome::Success { stdout: "ok\n".into() }));
        assert_eq!((app.code_scroll, app.output_scroll), (0, 0));
    }

    #[test]
    fn test_run_state_machine() {
        let mut app = App::new("Hello world!");
        let code = app.begin_run().unwrap();
        assert_eq!(code, catalog::source_for("Hello world!"));
        assert_eq!(app.run_state, RunState::Compiling);

        // Edits during the run do not change the snapshot
        app.editor.insert_str("garbage");
        assert!(app.begin_run().is_none());

        app.set_phase(RunPhase::Executing);
        assert_eq!(app.run_state, RunState::Executing);

        app.finish_run(Ok(RunOutcome::Success { stdout: "Hello World! Rust works!\n".into() }));
        assert_eq!(app.run_state, RunState::Idle);
        let report = app.last_run.as_ref().unwrap();
        assert_eq!(report.code, code);
        assert!(report.success);
        assert_eq!(report.output, "Hello World! Rust works!\n");
        assert_eq!(app.status_message, "Run succeeded");
    }

    #[test]
    fn test_phase_ignored_when_idle() {
        let mut app = App::new("Hello world!");
        app.set_phase(RunPhase::Executing);
        assert_eq!(app.run_state, RunState::Idle);
    }

    #[test]
    fn test_failed_runs_are_reported() {
        let mut app = App::new("Hello world!");
        app.begin_run();
        app.finish_run(Ok(RunOutcome::TimedOut { limit: Duration::from_secs(1) }));
        assert!(!app.last_run.as_ref().unwrap().success);

        app.begin_run();
        app.finish_run(Err(RunError::Wait(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        ))));
        let report = app.last_run.as_ref().unwrap();
        assert!(!report.success);
        assert!(report.output.contains("boom"));
        assert_eq!(app.run_state, RunState::Idle);
    }
}
