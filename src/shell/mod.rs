//! Line-oriented command handling shared by every front end
//!
//! - [`Command`]: what an input line asks for
//! - [`HELP_TEXT`]: usage shown by the `help` command
//! - [`plain`]: the stdin/stdout shell and batch-file runner
//!
//! The terminal UI in [`crate::ui`] parses its input with the same [`Command`]
//! so both shells accept the same command set.

pub mod plain;

/// An input line, interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `q` or `quit`
    Quit,
    Help,
    History,
    /// Start collecting lines for a batch run
    Batch,
    /// Blank line
    Empty,
    /// Anything else goes to the evaluator verbatim
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Commands match the trimmed line exactly; everything else is an expression
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "q" | "quit" => Command::Quit,
            "help" => Command::Help,
            "history" => Command::History,
            "batch" => Command::Batch,
            "" => Command::Empty,
            _ => Command::Evaluate(line),
        }
    }
}

pub const HELP_TEXT: &[&str] = &[
    "=== RPN Calculator Help ===",
    "Arithmetic:",
    "  + - * /       four basic operations",
    "  ^             power (a b ^ = a to the power b)",
    "  sqrt          square root",
    "  sin cos tan   trigonometry (degrees)",
    "  fib           n-th Fibonacci number (n fib)",
    "Stack:",
    "  clear         empty the stack",
    "  show          print the stack, top first",
    "Commands:",
    "  history       list previous expressions",
    "  batch         evaluate several lines, ending with an empty line",
    "  help          show this help",
    "  q, quit       exit",
    "Examples:",
    "  5 5 +         -> 10",
    "  2 3 ^         -> 8",
    "  9 sqrt        -> 3",
    "  5 fib         -> 5",
];
