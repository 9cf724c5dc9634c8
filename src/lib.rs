//! # Introduction
//!
//! rpncalc is an interactive Reverse Polish Notation calculator. Each input
//! line is a sequence of whitespace-separated numbers and operators evaluated
//! against one operand stack that persists for the whole session; the value
//! left on top is the result.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Line → Lexer → Registry lookup → Operator → Operand stack → Result
//! ```
//!
//! 1. [`parser`] — splits a line into tokens and classifies each one.
//! 2. [`calculator`] — the [`calculator::Calculator`] session: operator
//!    registry, operator semantics, evaluation and batch runs.
//! 3. [`memory`] — the [`memory::stack::OperandStack`].
//! 4. [`history`] — the expression history and the output transcript.
//! 5. [`shell`] — command parsing, help text, the plain line-mode shell and
//!    the batch-file runner.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 7. [`config`] and [`logging`] — command-line options and log setup.
//!
//! ## Operators
//!
//! Binary: `+ - * / ^`. Unary: `sqrt`, `sin cos tan` (degrees), `fib`.
//! Stack: `clear`, `show`.
//!
//! ```
//! use rpncalc::calculator::{Calculator, EvalError};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.evaluate("5 5 +"), Ok(10.0));
//! assert_eq!(calc.evaluate("1 0 /"), Err(EvalError::DivisionByZero));
//! assert_eq!(calc.history().len(), 2);
//! ```

pub mod calculator;
pub mod config;
pub mod history;
pub mod logging;
pub mod memory;
pub mod parser;
pub mod shell;
pub mod ui;
