//! Lexer (tokenizer) for RPN expressions
//!
//! Splitting and classification are separate steps. [`tokenize`] only cuts a
//! line on runs of whitespace and never fails; [`classify`] decides what each
//! piece is at evaluation time, leaving malformed input for the evaluator to
//! report.

use crate::calculator::registry::{Operator, Registry};

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Numeric literal, already parsed
    Number(f64),

    /// Registered operator, including the whole-stack commands
    Operator(Operator),

    /// Neither an operator nor a number
    Invalid(&'a str),
}

/// Split a line into whitespace-delimited tokens.
///
/// Empty or blank input yields no tokens. There is no quoting or escaping.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Classify a single token against the registry.
///
/// Operator spellings win over numbers, so `-` is subtraction while `-4` is a
/// negative literal.
pub fn classify<'a>(text: &'a str, registry: &Registry) -> Token<'a> {
    match registry.lookup(text) {
        Some(op) => Token::Operator(op),
        None => match parse_number(text) {
            Some(value) => Token::Number(value),
            None => Token::Invalid(text),
        },
    }
}

/// Parse a decimal floating-point literal.
///
/// Accepts integers, decimals, a leading sign and exponent notation. Named
/// values such as `inf` or `NaN` are rejected even though `f64::from_str`
/// would take them, and so are literals outside the `f64` range: `1e400`
/// would overflow to infinity and `1e-400` would underflow to zero.
fn parse_number(text: &str) -> Option<f64> {
    let is_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal {
        return None;
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
        if mantissa.chars().any(|c| matches!(c, '1'..='9')) {
            return None;
        }
    } else if !value.is_normal() {
        return None;
    }
    Some(value)
}
