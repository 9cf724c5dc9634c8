//! Unary operator evaluation

use crate::calculator::constants::{DEGREES_TO_RADIANS, FIB_LAST_FINITE};
use crate::calculator::engine::Calculator;
use crate::calculator::errors::EvalError;
use crate::calculator::registry::UnaryOp;

impl Calculator {
    pub(crate) fn apply_unary(&mut self, op: UnaryOp) -> Result<(), EvalError> {
        let stack = self.stack_mut();
        stack.require(op.symbol(), 1)?;

        let a = stack.pop()?;
        let value = unary_result(op, a)?;
        stack.push(value);
        Ok(())
    }
}

/// Apply `op` to `a`; trigonometric operands are in degrees
pub fn unary_result(op: UnaryOp, a: f64) -> Result<f64, EvalError> {
    match op {
        UnaryOp::Sqrt => {
            if a < 0.0 {
                Err(EvalError::InvalidDomain {
                    operator: op,
                    value: a,
                })
            } else {
                Ok(a.sqrt())
            }
        }
        UnaryOp::Sin => Ok((a * DEGREES_TO_RADIANS).sin()),
        UnaryOp::Cos => Ok((a * DEGREES_TO_RADIANS).cos()),
        UnaryOp::Tan => Ok((a * DEGREES_TO_RADIANS).tan()),
        UnaryOp::Fib => fibonacci(a),
    }
}

/// The n-th Fibonacci number with F(0) = 0 and F(1) = 1
///
/// `n` must be a non-negative whole number. Integrality is an exact
/// `n == n.floor()` test with no tolerance, so a value like `2.9999999999999996`
/// left over from earlier arithmetic is rejected.
pub fn fibonacci(n: f64) -> Result<f64, EvalError> {
    if n < 0.0 || n != n.floor() {
        return Err(EvalError::InvalidDomain {
            operator: UnaryOp::Fib,
            value: n,
        });
    }
    if n > FIB_LAST_FINITE as f64 {
        return Ok(f64::INFINITY);
    }

    let (mut a, mut b) = (0.0_f64, 1.0_f64);
    for _ in 0..n as u32 {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(a)
}
