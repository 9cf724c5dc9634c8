//! Whole-stack commands: `clear` and `show`

use crate::calculator::engine::Calculator;
use crate::calculator::format::format_number;
use crate::calculator::registry::StackCommand;
use tracing::debug;

impl Calculator {
    /// Run a stack command; these never fail
    pub(crate) fn run_command(&mut self, cmd: StackCommand) {
        match cmd {
            StackCommand::Clear => {
                let discarded = self.stack_mut().clear();
                debug!(discarded, "stack cleared");
                self.transcript_mut().info("Stack cleared");
            }
            StackCommand::Show => {
                let line = describe_stack(&self.stack_snapshot());
                self.transcript_mut().info(line);
            }
        }
    }
}

/// One-line rendering of a top-to-bottom snapshot
pub fn describe_stack(snapshot: &[f64]) -> String {
    if snapshot.is_empty() {
        return "Stack is empty".to_string();
    }
    let values: Vec<String> = snapshot.iter().map(|v| format_number(*v)).collect();
    format!("Stack (top to bottom): {}", values.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_stack() {
        assert_eq!(describe_stack(&[]), "Stack is empty");
        assert_eq!(
            describe_stack(&[3.0, 2.5, -1.0]),
            "Stack (top to bottom): 3 2.5 -1"
        );
    }

    #[test]
    fn test_clear_notifies() {
        let mut calc = Calculator::new();
        calc.stack_mut().push(1.0);
        calc.run_command(StackCommand::Clear);

        assert_eq!(calc.stack_size(), 0);
        let last = calc.transcript().lines().last().map(|l| l.text.as_str());
        assert_eq!(last, Some("Stack cleared"));
    }

    #[test]
    fn test_show_leaves_stack() {
        let mut calc = Calculator::new();
        calc.stack_mut().push(1.0);
        calc.stack_mut().push(2.0);
        calc.run_command(StackCommand::Show);
        calc.run_command(StackCommand::Show);

        assert_eq!(calc.stack_size(), 2);
        let lines = calc.transcript().lines();
        assert_eq!(lines[0].text, "Stack (top to bottom): 2 1");
        assert_eq!(lines[0], lines[1]);
    }
}
