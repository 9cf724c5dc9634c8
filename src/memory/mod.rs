//! Memory model for the calculator
//!
//! - [`stack`]: the operand stack every operator reads from and writes to
//!
//! The calculator has no heap and no variables; the operand stack is the only
//! working memory and lives exactly as long as its [`Calculator`] session.
//!
//! [`Calculator`]: crate::calculator::engine::Calculator

pub mod stack;
