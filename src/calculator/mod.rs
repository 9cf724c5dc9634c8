//! RPN expression evaluation
//!
//! This module provides the evaluation core:
//! - [`engine`]: the [`Calculator`] session with `evaluate` and `process_batch`
//! - [`registry`]: token spelling to operator lookup
//! - [`ops`]: operator semantics, split by arity
//! - [`errors`]: evaluation error types
//! - [`format`]: number formatting for display
//!
//! # Evaluation Model
//!
//! Tokens run left to right against one operand stack. Binary operators pop
//! the right operand first, so `a b OP` computes `OP(a, b)`. The first failing
//! token ends the expression; earlier stack effects are kept.
//!
//! [`Calculator`]: engine::Calculator

pub mod constants;
pub mod engine;
pub mod errors;
pub mod format;
pub mod ops;
pub mod registry;

pub use engine::Calculator;
pub use errors::EvalError;
