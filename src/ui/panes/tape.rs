//! Tape pane rendering

use crate::memory::{Cell, Tape};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the tape, one cell per row, keeping the cursor row in view.
pub fn render_tape_pane(frame: &mut Frame, area: Rect, tape: &Tape) {
    let block = Block::default()
        .title(format!(" Tape ({} cells) ", tape.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let offset = scroll_offset(tape.len(), tape.cursor(), visible_height);

    let items: Vec<ListItem> = tape
        .cells()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(index, value)| cell_item(index, value, index == tape.cursor()))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn cell_item(index: usize, value: Cell, is_cursor: bool) -> ListItem<'static> {
    let marker = if is_cursor { "▶ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.cursor)),
        Span::styled(
            format!("[{:>4}] ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
    ];
    if let Some(c) = printable(value) {
        spans.push(Span::styled(
            format!("  '{}'", c),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let item = ListItem::new(Line::from(spans));
    if is_cursor {
        item.style(
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        item
    }
}

fn printable(value: Cell) -> Option<char> {
    u8::try_from(value)
        .ok()
        .filter(|b| b.is_ascii_graphic())
        .map(char::from)
}

/// First visible row. The cursor is centered once the tape is taller than
/// the pane, without scrolling past the last cell.
pub fn scroll_offset(len: usize, cursor: usize, visible_height: usize) -> usize {
    if len <= visible_height {
        return 0;
    }
    let max_scroll = len - visible_height;
    cursor.saturating_sub(visible_height / 2).min(max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_short_tape() {
        assert_eq!(scroll_offset(3, 2, 10), 0);
    }

    #[test]
    fn test_scroll_offset_centers_cursor() {
        assert_eq!(scroll_offset(100, 50, 10), 45);
        assert_eq!(scroll_offset(100, 2, 10), 0);
        assert_eq!(scroll_offset(100, 99, 10), 90);
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable(72), Some('H'));
        assert_eq!(printable(32), None);
        assert_eq!(printable(-1), None);
        assert_eq!(printable(300), None);
    }
}
