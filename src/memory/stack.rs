//! Operand stack implementation
//!
//! This module provides [`OperandStack`], the last-in-first-out working memory
//! of the calculator.
//!
//! # Access Rules
//!
//! Values are only reachable through the top: push, pop, peek, clear and a
//! read-only top-to-bottom snapshot for display. There is no indexed access.

use crate::calculator::errors::EvalError;

/// LIFO stack of `f64` operands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { values: Vec::new() }
    }

    /// Push a value as the new top
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<f64, EvalError> {
        self.values.pop().ok_or(EvalError::StackUnderflow {
            operator: "pop".to_string(),
            required: 1,
            available: 0,
        })
    }

    /// Return the top value without removing it
    pub fn peek_top(&self) -> Result<f64, EvalError> {
        self.values.last().copied().ok_or(EvalError::StackUnderflow {
            operator: "peek".to_string(),
            required: 1,
            available: 0,
        })
    }

    /// Check that `operator` can pop `count` operands
    ///
    /// Operators call this before popping anything, so an underflow leaves the
    /// stack as it was.
    pub fn require(&self, operator: &str, count: usize) -> Result<(), EvalError> {
        if self.values.len() < count {
            return Err(EvalError::StackUnderflow {
                operator: operator.to_string(),
                required: count,
                available: self.values.len(),
            });
        }
        Ok(())
    }

    /// Remove every value, returning how many were discarded
    pub fn clear(&mut self) -> usize {
        let discarded = self.values.len();
        self.values.clear();
        discarded
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of the contents, top first
    pub fn snapshot_top_to_bottom(&self) -> Vec<f64> {
        self.values.iter().rev().copied().collect()
    }
}
