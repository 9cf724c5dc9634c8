//! TUI pane rendering modules
//!
//! Each pane module exports one stateless `render_*` function taking the frame,
//! its area, the data to show, whether it has focus and (for scrollable panes)
//! a mutable scroll offset.
//!
//! # Pane Modules
//!
//! - [`output`]: calculator transcript, results and errors
//! - [`prompt`]: the input line with cursor
//! - [`stack`]: operand stack, top first
//! - [`history`]: submitted expressions with their index
//! - [`status`]: status bar with stack depth, mode and keybindings

pub mod history;
pub mod output;
pub mod prompt;
pub mod stack;
pub mod status;

pub use history::render_history_pane;
pub use output::render_output_pane;
pub use prompt::render_prompt_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border colour follows focus
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` to the scrollable range and return how many rows fit
///
/// An offset of `usize::MAX` pins the view to the last rows.
pub(crate) fn clamp_scroll(total_items: usize, area: Rect, offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
    visible_height
}
