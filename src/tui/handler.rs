//! Async event loop for the playground TUI.

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::cursor::Show;
use crossterm::ExecutableCommand;
use log::{debug, info};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::runner::Runner;
use super::{
    app::{App, Focus},
    events::TuiEvent,
    ui::render_ui,
};

/// Rows moved by PageUp/PageDown in the editor and result panes
const PAGE_ROWS: usize = 10;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Run,
    Quit,
}

/// Fails with a pointer to the headless modes when stdout is not a terminal
pub fn ensure_terminal(is_tty: bool) -> Result<()> {
    if !is_tty {
        bail!("the interactive playground needs a terminal; use --run or --file for headless runs");
    }
    Ok(())
}

/// Best-effort terminal restore, also used from the panic hook
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Run the interactive playground until the user quits
pub async fn run_tui(runner: Runner, initial_example: &str) -> Result<()> {
    ensure_terminal(io::stdout().is_terminal())?;

    // A panic must not leave the shell in raw mode on the alternate screen
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(initial_example);
    info!(
        "playground started with '{}' (compiler: {})",
        app.selected_example().name,
        runner.settings().compiler
    );

    let result = run_app(&mut terminal, &mut app, Arc::new(runner)).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableBracketedPaste)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    // Back to the default hook
    drop(panic::take_hook());

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: Arc<Runner>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        while !input_tx.is_closed() {
            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => TuiEvent::Key(key),
                Ok(Event::Paste(text)) => TuiEvent::Paste(text),
                Ok(Event::Resize(_, _)) => TuiEvent::Resize,
                _ => continue,
            };
            if input_tx.send(forwarded).is_err() {
                break; // Channel closed
            }
        }
    });

    loop {
        terminal.draw(|frame| render_ui(frame, &mut *app))?;

        let Some(tui_event) = event_rx.recv().await else {
            break;
        };
        match tui_event {
            TuiEvent::Key(key) => match handle_key(app, key) {
                Action::Quit => break,
                Action::Run => spawn_run(app, &runner, &event_tx),
                Action::None => {}
            },
            TuiEvent::Paste(text) => {
                if app.focus == Focus::Editor {
                    app.editor.insert_str(&text);
                }
            }
            TuiEvent::Resize => {}
            TuiEvent::RunPhase(phase) => {
                debug!("run phase {phase:?}");
                app.set_phase(phase);
            }
            TuiEvent::RunFinished(result) => app.finish_run(result),
        }
    }

    Ok(())
}

/// Start a background run of the current buffer unless one is already in flight
fn spawn_run(app: &mut App, runner: &Arc<Runner>, event_tx: &mpsc::UnboundedSender<TuiEvent>) {
    let Some(code) = app.begin_run() else {
        return;
    };
    let runner = Arc::clone(runner);
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let phase_tx = tx.clone();
        let result = runner
            .run_with_progress(&code, move |phase| {
                let _ = phase_tx.send(TuiEvent::RunPhase(phase));
            })
            .await;
        let _ = tx.send(TuiEvent::RunFinished(result));
    });
}

/// Apply a key press to the app state
pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Action::Quit,
        _ => {}
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return Action::None;
    }

    match key.code {
        KeyCode::F(1) => {
            app.toggle_help();
            return Action::None;
        }
        KeyCode::F(2) => {
            app.toggle_explanation();
            return Action::None;
        }
        KeyCode::F(5) => return Action::Run,
        KeyCode::Char('r') if ctrl => return Action::Run,
        KeyCode::Esc => {
            app.focus = Focus::Selector;
            return Action::None;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Action::None;
        }
        _ => {}
    }

    match app.focus {
        Focus::Selector => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.highlight_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
            KeyCode::Enter => app.confirm_highlight(),
            KeyCode::Tab => app.focus_next(),
            _ => {}
        },
        Focus::Editor => handle_editor_key(app, key, ctrl),
        Focus::RunButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => return Action::Run,
            KeyCode::Tab => app.focus_next(),
            _ => {}
        },
        Focus::Output => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
            KeyCode::PageUp => app.scroll_up(PAGE_ROWS),
            KeyCode::PageDown => app.scroll_down(PAGE_ROWS),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
            KeyCode::Left | KeyCode::Right => app.switch_pane(),
            KeyCode::Tab => app.focus_next(),
            _ => {}
        },
    }

    Action::None
}

fn handle_editor_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    let editor = &mut app.editor;
    match key.code {
        KeyCode::Char(c) if !ctrl => editor.insert_char(c),
        KeyCode::Enter => editor.newline(),
        KeyCode::Tab => editor.indent(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        KeyCode::PageUp => editor.move_rows_up(PAGE_ROWS),
        KeyCode::PageDown => editor.move_rows_down(PAGE_ROWS),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::tui::app::ResultPane;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("Hello world!");
        assert_eq!(handle_key(&mut app, ctrl('c')), Action::Quit);
        assert_eq!(handle_key(&mut app, ctrl('q')), Action::Quit);
    }

    #[test]
    fn test_run_keys() {
        let mut app = App::new("Hello world!");
        assert_eq!(handle_key(&mut app, key(KeyCode::F(5))), Action::Run);
        assert_eq!(handle_key(&mut app, ctrl('r')), Action::Run);

        app.focus = Focus::RunButton;
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter)), Action::Run);
    }

    #[test]
    fn test_selector_loads_example_on_enter() {
        let mut app = App::new("Hello world!");
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.editor.text(), catalog::source_for("Hello world!"));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.editor.text(), catalog::source_for("Variable binding"));
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn test_typing_edits_buffer() {
        let mut app = App::new("Hello world!");
        app.focus = Focus::Editor;
        for c in "// hi".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.editor.text().starts_with("// hi\nfn main()"));

        // Tab indents inside the editor instead of moving focus
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
        assert!(app.editor.text().starts_with("// hi\n    fn main()"));
    }

    #[test]
    fn test_selector_letters_do_not_edit() {
        let mut app = App::new("Hello world!");
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.editor.text(), catalog::source_for("Hello world!"));
    }

    #[test]
    fn test_escape_returns_to_selector() {
        let mut app = App::new("Hello world!");
        app.focus = Focus::Editor;
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Selector);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn test_result_panes_take_scroll_keys() {
        let mut app = App::new("Hello world!");
        app.focus = Focus::RunButton;
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Output);

        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::PageDown));
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.output_scroll, PAGE_ROWS);

        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.active_pane, ResultPane::Code);
        handle_key(&mut app, key(KeyCode::End));
        assert_eq!(app.code_scroll, usize::MAX);
        handle_key(&mut app, key(KeyCode::Home));
        assert_eq!(app.code_scroll, 0);
        assert_eq!(app.output_scroll, PAGE_ROWS);

        // Scroll keys never reach the editor buffer
        assert_eq!(app.editor.text(), catalog::source_for("Hello world!"));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Selector);
    }

    #[test]
    fn test_ensure_terminal() {
        assert!(ensure_terminal(true).is_ok());
        let err = ensure_terminal(false).unwrap_err().to_string();
        assert!(err.contains("--run"), "{err}");
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = App::new("Hello world!");
        handle_key(&mut app, key(KeyCode::F(1)));
        assert!(app.show_help);
        assert_eq!(handle_key(&mut app, key(KeyCode::F(5))), Action::None);
        assert!(!app.show_help);
    }

    #[test]
    fn test_toggle_explanation() {
        let mut app = App::new("Hello world!");
        assert!(app.show_explanation);
        handle_key(&mut app, key(KeyCode::F(2)));
        assert!(!app.show_explanation);
    }
}
