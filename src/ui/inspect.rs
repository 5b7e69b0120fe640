//! Dashboard layout and inline drawing

use crate::interpreter::engine::Interpreter;
use crate::ui::panes::{self, StatusRenderData};
use crossterm::terminal;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    Frame, Terminal, TerminalOptions, Viewport,
};
use std::io;

/// Rows the inline dashboard occupies below the prompt.
pub const DASHBOARD_HEIGHT: u16 = 14;

/// Draw the dashboard once into an inline viewport on stdout and leave the
/// cursor on the line below it, so the session continues underneath.
pub fn draw_inline(interpreter: &Interpreter) -> io::Result<()> {
    // keep one row free for the prompt on short terminals
    let (_, rows) = terminal::size()?;
    let height = DASHBOARD_HEIGHT.min(rows.saturating_sub(1)).max(1);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;

    terminal.draw(|frame| {
        let area = frame.area();
        render_dashboard(frame, area, interpreter);
        frame.set_cursor_position(Position::new(area.x, area.bottom().saturating_sub(1)));
    })?;
    terminal.show_cursor()?;
    println!();
    Ok(())
}

/// Lay out and render every pane for `interpreter` into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, interpreter: &Interpreter) {
    // Panes on top, status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let pane_area = main_chunks[0];
    let status_area = main_chunks[1];

    // Left: tape | Right: input (top), output (bottom)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(pane_area);

    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[1]);

    let tape = interpreter.tape();
    let output = interpreter.output();
    let pending = interpreter
        .syntax()
        .render(&interpreter.retained_input());

    panes::render_tape_pane(frame, columns[0], tape);
    panes::render_input_pane(frame, right_rows[0], &pending, interpreter.open_loops());
    panes::render_output_pane(frame, right_rows[1], output);
    panes::render_status_bar(
        frame,
        status_area,
        StatusRenderData {
            syntax: interpreter.syntax_kind(),
            open_loops: interpreter.open_loops(),
            cursor: tape.cursor(),
            tape_len: tape.len(),
            output_len: output.len(),
        },
    );
}
