//! History pane rendering

use super::{clamp_scroll, pane_block};
use crate::history::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render submitted expressions, oldest first, with their 1-based index
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" History ".to_string(), is_focused);

    if history.is_empty() {
        let paragraph = Paragraph::new("(no expressions yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(history.len(), area, scroll_offset);

    let items: Vec<ListItem> = history
        .list()
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, expression)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>3} ", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(expression.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
