//! Output pane rendering

use super::{clamp_scroll, pane_block};
use crate::history::{LineKind, TranscriptLine};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the transcript, coloured by line kind
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[TranscriptLine],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ".to_string(), is_focused);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output yet, type 'help')")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = clamp_scroll(lines.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            let color = match line.kind {
                LineKind::Info => DEFAULT_THEME.fg,
                LineKind::Result => DEFAULT_THEME.success,
                LineKind::Error => DEFAULT_THEME.error,
            };
            ListItem::new(line.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
