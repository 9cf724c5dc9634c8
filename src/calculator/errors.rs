//! Evaluation error types for the calculator
//!
//! This module defines [`EvalError`], which represents every way a single
//! expression can fail to evaluate.
//!
//! No evaluation error is fatal to the session - the shell displays the message
//! and keeps accepting input. Stack mutations made by tokens before the failing
//! one are not rolled back.

use std::fmt;

use crate::calculator::registry::UnaryOp;

/// Errors that can occur while evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator needed more operands than the stack holds
    StackUnderflow {
        operator: String,
        required: usize,
        available: usize,
    },

    /// Divisor of `/` was exactly zero
    DivisionByZero,

    /// Operand outside the domain of `sqrt` or `fib`
    InvalidDomain { operator: UnaryOp, value: f64 },

    /// Neither a known operator nor a parseable number
    InvalidToken { token: String },

    /// All tokens evaluated but nothing is left to report
    EmptyResult,
}

impl EvalError {
    /// Short name of the error class, used by log events and the status bar
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::StackUnderflow { .. } => "stack underflow",
            EvalError::DivisionByZero => "division by zero",
            EvalError::InvalidDomain { .. } => "invalid domain",
            EvalError::InvalidToken { .. } => "invalid token",
            EvalError::EmptyResult => "empty result",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::StackUnderflow {
                operator,
                required,
                available,
            } => {
                write!(
                    f,
                    "Stack underflow: '{}' needs {} operand{}, stack holds {}",
                    operator,
                    required,
                    if *required == 1 { "" } else { "s" },
                    available
                )
            }
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::InvalidDomain { operator, value } => match operator {
                UnaryOp::Sqrt => {
                    write!(f, "Cannot take the square root of negative number {}", value)
                }
                UnaryOp::Fib => write!(
                    f,
                    "Fibonacci needs a non-negative integer, got {}",
                    value
                ),
                UnaryOp::Sin | UnaryOp::Cos | UnaryOp::Tan => {
                    write!(f, "'{}' is undefined for {}", operator.symbol(), value)
                }
            },
            EvalError::InvalidToken { token } => write!(f, "Invalid input: '{}'", token),
            EvalError::EmptyResult => write!(f, "Calculation left no value on stack"),
        }
    }
}

impl std::error::Error for EvalError {}
