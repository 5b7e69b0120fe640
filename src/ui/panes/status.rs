//! Status bar rendering with the active syntax and recording state

use crate::syntax::SyntaxKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRenderData {
    pub syntax: SyntaxKind,
    pub open_loops: usize,
    pub cursor: usize,
    pub tape_len: usize,
    pub output_len: usize,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.status_bg);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.syntax),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!(
                "cursor {} of {} cell(s), {} value(s) written ",
                data.cursor, data.tape_len, data.output_len
            ),
            bar.fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let badge = if data.open_loops > 0 {
        Span::styled(
            format!(" ⟳ RECORDING ({}) ", data.open_loops),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " READY ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let right_paragraph = Paragraph::new(Line::from(vec![badge]))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
