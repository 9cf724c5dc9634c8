//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key label and action shown on the right of the status bar
const KEYBINDINGS: &[(&str, &str)] = &[
    ("↵", "eval"),
    ("↑/↓", "recall/scroll"),
    ("Tab", "focus"),
    ("Esc", "quit"),
];

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub stack_depth: usize,
    /// Whether the last submission failed
    pub is_error: bool,
    pub is_batch: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: stack depth and last message
    let left_spans = vec![
        Span::styled(
            format!(" Depth {} ", data.stack_depth),
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.is_batch {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let mut right_spans = keybinding_spans(KEYBINDINGS);
    if data.is_batch {
        right_spans.push(Span::styled(
            " BATCH ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

/// Key badge then description for each binding, each group closed by a divider
fn keybinding_spans(bindings: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let divider_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    bindings
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {} ", key), key_style),
                Span::styled(format!(" {} ", desc), desc_style),
                Span::styled("│", divider_style),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn bar_text(is_batch: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 1)).unwrap();
        terminal
            .draw(|f| {
                let data = StatusRenderData {
                    message: "Ready",
                    stack_depth: 3,
                    is_error: false,
                    is_batch,
                };
                render_status_bar(f, f.area(), data);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_keybinding_spans() {
        let spans = keybinding_spans(&[("Tab", "focus"), ("Esc", "quit")]);
        let text: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec![" Tab ", " focus ", "│", " Esc ", " quit ", "│"]);
    }

    #[test]
    fn test_status_bar_contents() {
        let text = bar_text(false);
        assert!(text.contains("Depth 3"));
        assert!(text.contains("Ready"));
        for (key, desc) in KEYBINDINGS {
            assert!(text.contains(key), "missing key {}", key);
            assert!(text.contains(desc), "missing action {}", desc);
        }
        assert!(!text.contains("BATCH"));

        assert!(bar_text(true).contains("BATCH"));
    }
}
