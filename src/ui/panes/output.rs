//! Output pane rendering

use crate::memory::OutputBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render both views of the output buffer: raw numbers and decoded text.
pub fn render_output_pane(frame: &mut Frame, area: Rect, output: &OutputBuffer) {
    let block = Block::default()
        .title(format!(" Output ({} values) ", output.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let label = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let text_line = match output.as_characters() {
        Ok(text) => Line::from(vec![
            Span::styled("ascii ", label),
            Span::styled(text, Style::default().fg(DEFAULT_THEME.success)),
        ]),
        Err(e) => Line::from(vec![
            Span::styled("ascii ", label),
            Span::styled(e.to_string(), Style::default().fg(DEFAULT_THEME.error)),
        ]),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("raw   ", label),
            Span::styled(
                output.as_numeric_list(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]),
        text_line,
    ];

    let paragraph = Paragraph::new(lines)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
