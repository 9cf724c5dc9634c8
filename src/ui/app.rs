//! Main TUI application state and logic

use crate::calculator::format::format_fixed;
use crate::calculator::Calculator;
use crate::shell::{Command, HELP_TEXT};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

use super::input::InputLine;
use super::panes::{self, StatusRenderData};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Output,
    Stack,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: input -> output -> stack -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::History,
            FocusedPane::History => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::History,
            FocusedPane::Output => FocusedPane::Input,
            FocusedPane::Stack => FocusedPane::Output,
            FocusedPane::History => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator session
    pub calculator: Calculator,

    /// Line being edited
    pub input: InputLine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets (`usize::MAX` = follow the end)
    pub output_scroll: usize,
    pub stack_scroll: usize,
    pub history_scroll: usize,

    /// Lines collected since the `batch` command, `None` outside batch mode
    pub batch: Option<Vec<String>>,

    /// History index being recalled with Up/Down
    pub recall: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last submission ended in an error
    pub last_failed: bool,
}

impl App {
    /// Create a new app around a calculator session
    pub fn new(calculator: Calculator) -> Self {
        App {
            calculator,
            input: InputLine::new(),
            focused_pane: FocusedPane::Input,
            output_scroll: usize::MAX,
            stack_scroll: 0,
            history_scroll: usize::MAX,
            batch: None,
            recall: None,
            should_quit: false,
            status_message: String::from("Ready! Type 'help' for usage"),
            last_failed: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!(
            expressions = self.calculator.history().len(),
            "session ended"
        );
        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Output (top) | Input (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(columns[0]);

        // Right column: Stack (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        panes::render_output_pane(
            frame,
            left_rows[0],
            self.calculator.transcript().lines(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_prompt_pane(
            frame,
            left_rows[1],
            &self.input,
            self.batch.as_ref().map(|lines| lines.len()),
            self.focused_pane == FocusedPane::Input,
        );

        panes::render_stack_pane(
            frame,
            right_rows[0],
            &self.calculator.stack_snapshot(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        panes::render_history_pane(
            frame,
            right_rows[1],
            self.calculator.history(),
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                stack_depth: self.calculator.stack_size(),
                is_error: self.last_failed,
                is_batch: self.batch.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('d') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Input => self.recall_previous(),
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Input => self.recall_next(),
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
            },
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_to_start(),
            KeyCode::End => self.input.move_to_end(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Char(c) => {
                // Typing always goes to the prompt
                self.focused_pane = FocusedPane::Input;
                self.input.insert_char(c);
            }
            _ => {}
        }
    }

    /// Act on the current input line
    pub fn submit(&mut self) {
        let line = self.input.take();
        self.recall = None;
        self.output_scroll = usize::MAX;

        if let Some(queued) = self.batch.as_mut() {
            if !line.is_empty() {
                queued.push(line);
                self.status_message = format!("{} line(s) queued", queued.len());
                return;
            }
            let expressions = self.batch.take().unwrap_or_default();
            self.run_batch(&expressions);
            return;
        }

        match Command::parse(&line) {
            Command::Quit => self.should_quit = true,
            Command::Help => {
                let transcript = self.calculator.transcript_mut();
                for text in HELP_TEXT {
                    transcript.info(*text);
                }
                self.status_message = "Help".to_string();
            }
            Command::History => {
                // The pane already lists everything; focus it and echo the list
                let entries: Vec<String> = self
                    .calculator
                    .history()
                    .list()
                    .into_iter()
                    .map(|(index, expression)| format!("{}: {}", index, expression))
                    .collect();
                let transcript = self.calculator.transcript_mut();
                transcript.info("History:");
                for entry in entries {
                    transcript.info(entry);
                }
                self.focused_pane = FocusedPane::History;
                self.history_scroll = usize::MAX;
                self.status_message = "History".to_string();
            }
            Command::Batch => {
                self.batch = Some(Vec::new());
                self.calculator.transcript_mut().info(
                    "Batch mode: enter one expression per line, finish with an empty line",
                );
                self.status_message = "Collecting batch".to_string();
            }
            Command::Empty => {}
            Command::Evaluate(expression) => self.evaluate(expression),
        }
    }

    fn evaluate(&mut self, expression: &str) {
        self.calculator
            .transcript_mut()
            .info(format!("> {}", expression));

        match self.calculator.evaluate(expression) {
            Ok(value) => {
                let text = format!("Result: {}", format_fixed(value));
                self.calculator.transcript_mut().result(text.clone());
                self.status_message = text;
                self.last_failed = false;
            }
            Err(e) => {
                self.calculator
                    .transcript_mut()
                    .error(format!("Error: {}", e));
                self.status_message = format!("Error: {}", e.kind());
                self.last_failed = true;
            }
        }
        self.history_scroll = usize::MAX;
    }

    fn run_batch(&mut self, expressions: &[String]) {
        let results = self.calculator.process_batch(expressions);
        let failed = results.iter().filter(|r| r.is_err()).count();

        self.status_message = format!(
            "Batch of {} finished, {} failed",
            results.len(),
            failed
        );
        self.last_failed = failed > 0;
        self.history_scroll = usize::MAX;
    }

    /// Step back through history into the input line
    fn recall_previous(&mut self) {
        let entries = self.calculator.history().entries();
        if entries.is_empty() {
            return;
        }
        let index = match self.recall {
            None => entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.input.set(&entries[index]);
        self.recall = Some(index);
    }

    /// Step forward through history; past the newest entry the line is cleared
    fn recall_next(&mut self) {
        let Some(i) = self.recall else {
            return;
        };
        let entries = self.calculator.history().entries();
        if i + 1 < entries.len() {
            self.input.set(&entries[i + 1]);
            self.recall = Some(i + 1);
        } else {
            self.input.clear();
            self.recall = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typed_expression_is_evaluated() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "5 5 +");

        assert_eq!(app.calculator.stack_snapshot(), vec![10.0]);
        assert_eq!(app.status_message, "Result: 10.000000");
        assert!(!app.last_failed);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_error_sets_status() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "1 0 /");

        assert!(app.last_failed);
        assert_eq!(app.status_message, "Error: division by zero");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_commands() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "quit");
        assert!(app.should_quit);

        let mut app = App::new(Calculator::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_batch_collects_until_empty_line() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "batch");
        assert!(app.batch.is_some());

        type_line(&mut app, "1 1 +");
        type_line(&mut app, "1 0 /");
        type_line(&mut app, "2 2 *");
        assert_eq!(app.calculator.history().len(), 0);

        type_line(&mut app, "");
        assert!(app.batch.is_none());
        assert_eq!(app.calculator.history().len(), 3);
        assert_eq!(app.status_message, "Batch of 3 finished, 1 failed");
    }

    #[test]
    fn test_batch_keeps_whitespace_lines() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "batch");
        type_line(&mut app, "2 2 +");
        type_line(&mut app, "  ");
        assert!(app.batch.is_some());

        type_line(&mut app, "");
        assert_eq!(app.calculator.history().len(), 2);
        assert_eq!(app.status_message, "Batch of 2 finished, 1 failed");
    }

    #[test]
    fn test_history_recall() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "1 2 +");
        type_line(&mut app, "9 sqrt");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.content(), "9 sqrt");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.content(), "1 2 +");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.content(), "1 2 +");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input.content(), "9 sqrt");
        press(&mut app, KeyCode::Down);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::new(Calculator::new());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Output);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Input);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::History);
    }

    #[test]
    fn test_render_shows_stack_and_history() {
        let mut app = App::new(Calculator::new());
        type_line(&mut app, "3 4");
        type_line(&mut app, "show");

        let text = screen_text(&mut app);
        assert!(text.contains("Stack (2)"));
        assert!(text.contains("Stack (top to bottom): 4 3"));
        assert!(text.contains("Depth 2"));
        assert!(text.contains("show"));
    }
}
