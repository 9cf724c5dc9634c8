//! Input prompt rendering

use super::pane_block;
use crate::ui::input::InputLine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the input line and place the terminal cursor in it
///
/// `queued` is `Some(n)` while collecting batch lines.
pub fn render_prompt_pane(
    frame: &mut Frame,
    area: Rect,
    input: &InputLine,
    queued: Option<usize>,
    is_focused: bool,
) {
    let (title, prompt) = match queued {
        Some(n) => (format!(" Batch ({} queued, empty line runs) ", n), "batch> "),
        None => (" Input ".to_string(), "> "),
    };
    let block = pane_block(title, is_focused);

    let line = Line::from(vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.content(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if is_focused {
        let column = prompt.len() + input.cursor_column();
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(column as u16)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}
