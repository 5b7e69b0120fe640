//! Pending input pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render program text that has been fed but not executed yet.
pub fn render_input_pane(frame: &mut Frame, area: Rect, pending: &str, open_loops: usize) {
    let title = if open_loops > 0 {
        format!(" Input (recording, {} open) ", open_loops)
    } else {
        " Input ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let paragraph = if pending.is_empty() {
        Paragraph::new("(nothing pending)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(pending.to_string())
            .block(block.padding(Padding::new(1, 0, 0, 0)))
            .style(Style::default().fg(DEFAULT_THEME.secondary))
            .wrap(Wrap { trim: false })
    };
    frame.render_widget(paragraph, area);
}
