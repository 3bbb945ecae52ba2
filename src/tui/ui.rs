//! UI layout and rendering logic for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus, ResultPane, RunState};
use crate::catalog::{self, ExampleKind};
use crate::utils::unicode::split_to_width;

pub const TITLE: &str = "🦀 Rust vs Stylus: Interactive Smart Contract Comparison";

/// Render the main UI. Takes `&mut App` so the result panes can clamp their scroll offsets.
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Columns
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE).style(
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(main_layout[1]);

    render_input_column(frame, app, columns[0]);
    render_result_column(frame, app, columns[1]);
    render_explanation(frame, app, columns[2]);
    render_status_bar(frame, app, main_layout[2]);

    if app.show_help {
        render_help_overlay(frame);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Column 1: selector, caption, editor and run button
fn render_input_column(frame: &mut Frame, app: &App, area: Rect) {
    let examples = catalog::all();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(examples.len() as u16 + 2), // Selector
            Constraint::Length(1),                         // Caption
            Constraint::Min(3),                            // Editor
            Constraint::Length(3),                         // Run button
        ])
        .split(area);

    let selector_lines: Vec<Line> = examples
        .iter()
        .enumerate()
        .map(|(i, example)| {
            let marker = if i == app.highlighted { "▸ " } else { "  " };
            let mut style = match example.kind {
                ExampleKind::Plain => Style::default(),
                ExampleKind::Contract => Style::default().fg(Color::Cyan),
            };
            if i == app.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            if i == app.highlighted && app.focus == Focus::Selector {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw(marker),
                Span::styled(example.name, style),
                Span::styled(
                    format!("  [{}]", example.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    let selector = Paragraph::new(Text::from(selector_lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select an example")
            .border_style(focus_style(app.focus == Focus::Selector)),
    );
    frame.render_widget(selector, layout[0]);

    let caption = Paragraph::new(format!("Contents of {}:", app.selected_example().file))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption, layout[1]);

    render_editor(frame, app, layout[2]);

    let button_style = if app.is_busy() {
        Style::default().fg(Color::DarkGray)
    } else if app.focus == Focus::RunButton {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new("▶ Run Code (F5)")
        .style(button_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::RunButton)),
        );
    frame.render_widget(button, layout[3]);
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor = &app.editor;
    let (row, _) = editor.cursor();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Code Input · Ln {}/{}", row + 1, editor.line_count()))
        .border_style(focus_style(app.focus == Focus::Editor));
    let inner = block.inner(area);

    let height = inner.height as usize;
    let top = editor.scroll_for(height);
    let left = editor.hscroll_for(inner.width as usize);
    let lines: Vec<Line> = editor
        .lines()
        .iter()
        .skip(top)
        .take(height)
        .map(|l| Line::from(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .scroll((0, left as u16))
        .block(block);
    frame.render_widget(paragraph, area);

    if app.focus == Focus::Editor && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (editor.cursor_display_col() - left) as u16;
        let y = inner.y + (row - top) as u16;
        frame.set_cursor_position((x, y));
    }
}

/// Lines prefixed with a right-aligned line-number gutter, wrapped to `width` cells.
/// Continuation rows get a blank gutter.
pub fn numbered_rows(text: &str, width: usize) -> Vec<Line<'_>> {
    let count = text.lines().count().max(1);
    let digits = count.to_string().len();
    let gutter_style = Style::default().fg(Color::DarkGray);
    let body_width = width.saturating_sub(digits + 3).max(1);

    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        for (piece_no, piece) in split_to_width(line, body_width).into_iter().enumerate() {
            let gutter = if piece_no == 0 {
                format!("{:>digits$} │ ", i + 1)
            } else {
                format!("{:>digits$} │ ", "")
            };
            rows.push(Line::from(vec![
                Span::styled(gutter, gutter_style),
                Span::raw(piece),
            ]));
        }
    }
    rows
}

/// Draw `text` numbered and scrolled; returns the offset actually used.
fn render_scrolled_pane(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    text: &str,
    offset: usize,
) -> usize {
    let inner = block.inner(area);
    let rows = numbered_rows(text, inner.width as usize);
    let last_page = rows.len().saturating_sub(inner.height as usize);
    let offset = offset.min(last_page);
    let paragraph = Paragraph::new(Text::from(rows))
        .scroll((offset as u16, 0))
        .block(block);
    frame.render_widget(paragraph, area);
    offset
}

/// Column 2: snapshot of the code that ran and its output
fn render_result_column(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let pane_style =
        |pane: ResultPane| focus_style(app.focus == Focus::Output && app.active_pane == pane);
    let code_block = Block::default()
        .borders(Borders::ALL)
        .title("Code Content")
        .border_style(pane_style(ResultPane::Code));
    let output_block = Block::default()
        .borders(Borders::ALL)
        .title("Code Output")
        .border_style(pane_style(ResultPane::Output));

    let busy = app.is_busy();
    match app.last_run.as_ref() {
        Some(report) if !busy => {
            let color = if report.success { Color::Green } else { Color::Red };
            let output_block =
                output_block.title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
            let code_scroll =
                render_scrolled_pane(frame, layout[0], code_block, &report.code, app.code_scroll);
            let output_scroll = render_scrolled_pane(
                frame,
                layout[1],
                output_block,
                &report.output,
                app.output_scroll,
            );
            app.code_scroll = code_scroll;
            app.output_scroll = output_scroll;
        }
        _ => {
            let hint = match app.run_state {
                RunState::Idle => "Press F5 to run the code".to_string(),
                state => state.label().to_string(),
            };
            let dim = Style::default().fg(Color::DarkGray);
            frame.render_widget(Paragraph::new("").block(code_block), layout[0]);
            frame.render_widget(Paragraph::new(hint).style(dim).block(output_block), layout[1]);
        }
    }
}

/// Column 3: explanation of the selected example
fn render_explanation(frame: &mut Frame, app: &App, area: Rect) {
    let example = app.selected_example();
    let title = format!("Explanation: {}", example.file);
    let body = if app.show_explanation {
        Paragraph::new(example.explanation)
    } else {
        Paragraph::new("Press F2 to show the explanation")
            .style(Style::default().fg(Color::DarkGray))
    };
    let widget = body
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = format!(
        "[{}] {} | Tab focus · F5 run · ↑/↓ scroll results · F2 explanation · F1 help · Ctrl+Q quit",
        app.run_state.label(),
        app.status_message
    );
    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_paragraph, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from("Playground Help"),
        Line::from(""),
        Line::from("Selector:"),
        Line::from("  ↑/↓ or j/k  - Highlight an example"),
        Line::from("  Enter       - Load it into the editor"),
        Line::from(""),
        Line::from("Editor:"),
        Line::from("  Type freely; Tab indents"),
        Line::from("  Esc         - Back to the selector"),
        Line::from(""),
        Line::from("Result panes:"),
        Line::from("  ↑/↓ or j/k  - Scroll; PgUp/PgDn by a page"),
        Line::from("  Home/End    - Jump to the top or bottom"),
        Line::from("  ←/→         - Switch between code and output"),
        Line::from(""),
        Line::from("Anywhere:"),
        Line::from("  F5 / Ctrl+R - Compile and run"),
        Line::from("  Tab/Shift+Tab - Move focus"),
        Line::from("  F2          - Toggle explanation"),
        Line::from("  F1          - Toggle this help"),
        Line::from("  Ctrl+Q      - Quit"),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_paragraph, popup_area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunOutcome;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_ui(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut out = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            out.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                out.push('\n');
            }
        }
        out
    }

    fn draw(app: &mut App) -> String {
        draw_sized(app, 160, 40)
    }

    fn long_compile_failure(app: &mut App) {
        let diagnostics = (1..=60)
            .map(|i| format!("diagnostic line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        app.begin_run();
        app.finish_run(Ok(RunOutcome::CompileFailed { diagnostics }));
    }

    #[test]
    fn test_initial_screen() {
        let mut app = App::new("Hello world!");
        let screen = draw(&mut app);
        assert!(screen.contains("Rust vs Stylus"));
        assert!(screen.contains("Select an example"));
        assert!(screen.contains("Stylus Functions"));
        assert!(screen.contains("Contents of hello.rs:"));
        assert!(screen.contains("Code Input · Ln 1/3"));
        assert!(screen.contains("Press F5 to run the code"));
        assert!(screen.contains("Explanation: hello.rs"));
        assert!(screen.contains("[Idle]"));
    }

    #[test]
    fn test_result_column_after_run() {
        let mut app = App::new("Hello world!");
        app.begin_run();
        let screen = draw(&mut app);
        assert!(screen.contains("Compiling…"));

        app.finish_run(Ok(RunOutcome::Success {
            stdout: "Hello World! Rust works!\n".into(),
        }));
        let screen = draw(&mut app);
        assert!(screen.contains("1 │ Hello World! Rust works!"));
        assert!(screen.contains("println!"));
        assert!(screen.contains("Run succeeded"));
    }

    #[test]
    fn test_long_output_scrolls_to_last_line() {
        let mut app = App::new("Hello world!");
        long_compile_failure(&mut app);
        let screen = draw(&mut app);
        assert!(screen.contains("diagnostic line 10 "));
        assert!(!screen.contains("diagnostic line 60"));

        app.scroll_to_bottom();
        let screen = draw(&mut app);
        assert!(screen.contains("diagnostic line 60"));
        assert!(!screen.contains("diagnostic line 10 "));
        assert!(!screen.contains("compilation failed"));

        // The offset is clamped to the last page, so one step up leaves the bottom
        let bottom = app.output_scroll;
        assert!(bottom < 62);
        app.scroll_up(1);
        let screen = draw(&mut app);
        assert_eq!(app.output_scroll, bottom - 1);
        assert!(!screen.contains("diagnostic line 60"));
    }

    #[test]
    fn test_code_pane_scrolls_independently() {
        let mut app = App::new("Stylus Functions");
        app.begin_run();
        app.finish_run(Ok(RunOutcome::Success { stdout: "ok\n".into() }));
        let code_lines = app.last_run.as_ref().unwrap().code.lines().count();
        let last = format!("{code_lines} │ ");

        assert!(!draw(&mut app).contains(&last));
        app.switch_pane();
        app.scroll_to_bottom();
        let screen = draw(&mut app);
        assert!(screen.contains(&last));
        assert_eq!(app.output_scroll, 0);
        assert!(screen.contains("1 │ ok"));
    }

    #[test]
    fn test_wide_output_lines_wrap_instead_of_clipping() {
        let mut app = App::new("Hello world!");
        app.begin_run();
        let stdout = format!("{}END\n", "x".repeat(120));
        app.finish_run(Ok(RunOutcome::Success { stdout }));
        assert!(draw(&mut app).contains("END"));
    }

    #[test]
    fn test_editor_scrolls_sideways_to_cursor() {
        let mut app = App::new("Stylus Constants");
        app.focus = Focus::Editor;
        let first_line = app.editor.lines()[0].clone();
        let tail = &first_line[first_line.len() - 8..];

        assert!(!draw_sized(&mut app, 80, 40).contains(tail));
        app.editor.move_end();
        assert!(draw_sized(&mut app, 80, 40).contains(tail));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new("Hello world!");
        app.toggle_help();
        let screen = draw(&mut app);
        assert!(screen.contains("Playground Help"));
        assert!(screen.contains("Switch between code and output"));
    }

    #[test]
    fn test_numbered_rows_gutter_width() {
        let text = (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let rows = numbered_rows(&text, 40);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].spans[0].content, " 1 │ ");
        assert_eq!(rows[9].spans[0].content, "10 │ ");
    }

    #[test]
    fn test_numbered_rows_wrap_with_blank_gutter() {
        let rows = numbered_rows("abcdefghij\nz", 9);
        // Gutter is "1 │ " (4 cells), leaving 5 for the text
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].spans[1].content, "abcde");
        assert_eq!(rows[1].spans[0].content, "  │ ");
        assert_eq!(rows[1].spans[1].content, "fghij");
        assert_eq!(rows[2].spans[0].content, "2 │ ");
    }
}
