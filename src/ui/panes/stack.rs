//! Stack pane rendering
//!
//! Shows the operand stack top first. Each row carries its depth (1 = top) so
//! the position an operator will pop from is visible at a glance; the top row
//! is highlighted since it is what `evaluate` reports.

use super::{clamp_scroll, pane_block};
use crate::calculator::format::format_number;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the stack pane from a top-to-bottom snapshot
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &[f64],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Stack ({}) ", snapshot.len()), is_focused);

    if snapshot.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(snapshot.len(), area, scroll_offset);
    // Depth labels line up on the widest one
    let label_width = snapshot.len().to_string().len();

    let items: Vec<ListItem> = snapshot
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, value)| {
            let value_style = if i == 0 {
                Style::default()
                    .fg(DEFAULT_THEME.top_of_stack)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.number)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>width$}: ", i + 1, width = label_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format_number(*value), value_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
