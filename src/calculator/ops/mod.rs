//! Operator implementations, split by arity
//!
//! Each submodule extends [`Calculator`] with the dispatch for one family of
//! operators. Operands are always popped before any domain check runs, so a
//! rejected `/`, `sqrt` or `fib` has already consumed its operands.
//!
//! [`Calculator`]: crate::calculator::engine::Calculator

pub mod binary;
pub mod commands;
pub mod unary;
