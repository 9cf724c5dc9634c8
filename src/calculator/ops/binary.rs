//! Binary operator evaluation

use crate::calculator::engine::Calculator;
use crate::calculator::errors::EvalError;
use crate::calculator::registry::BinaryOp;

impl Calculator {
    /// Pop `b` then `a` and push `op(a, b)`
    pub(crate) fn apply_binary(&mut self, op: BinaryOp) -> Result<(), EvalError> {
        let stack = self.stack_mut();
        stack.require(op.symbol(), 2)?;

        let b = stack.pop()?;
        let a = stack.pop()?;
        let value = binary_result(op, a, b)?;
        stack.push(value);
        Ok(())
    }
}

/// Apply `op` with `a` as the left operand
pub fn binary_result(op: BinaryOp, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        BinaryOp::Pow => Ok(a.powf(b)),
    }
}
