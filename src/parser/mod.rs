//! Expression parsing
//!
//! RPN needs no grammar: a line is a flat sequence of tokens and the operand
//! stack does the rest. This module only holds the [`lexer`].

pub mod lexer;

pub use lexer::{classify, tokenize, Token};
