//! Operator registry
//!
//! Maps exact, case-sensitive token spellings to [`Operator`]s. Each operator
//! carries its arity in its variant: [`BinaryOp`] pops two operands,
//! [`UnaryOp`] pops one, and [`StackCommand`] pops nothing but acts on the
//! stack as a whole.

use rustc_hash::FxHashMap;

/// Two-operand arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// One-operand functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Fib,
}

/// Operators that act on the whole stack and push nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackCommand {
    Clear,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Command(StackCommand),
}

impl Operator {
    /// Every operator the calculator understands, in help-text order
    pub const ALL: [Operator; 12] = [
        Operator::Binary(BinaryOp::Add),
        Operator::Binary(BinaryOp::Sub),
        Operator::Binary(BinaryOp::Mul),
        Operator::Binary(BinaryOp::Div),
        Operator::Binary(BinaryOp::Pow),
        Operator::Unary(UnaryOp::Sqrt),
        Operator::Unary(UnaryOp::Sin),
        Operator::Unary(UnaryOp::Cos),
        Operator::Unary(UnaryOp::Tan),
        Operator::Unary(UnaryOp::Fib),
        Operator::Command(StackCommand::Clear),
        Operator::Command(StackCommand::Show),
    ];

    /// The token spelling of this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Binary(op) => op.symbol(),
            Operator::Unary(op) => op.symbol(),
            Operator::Command(cmd) => cmd.symbol(),
        }
    }

    /// Number of operands popped from the stack
    pub fn arity(&self) -> usize {
        match self {
            Operator::Binary(_) => 2,
            Operator::Unary(_) => 1,
            Operator::Command(_) => 0,
        }
    }
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Fib => "fib",
        }
    }
}

impl StackCommand {
    pub fn symbol(&self) -> &'static str {
        match self {
            StackCommand::Clear => "clear",
            StackCommand::Show => "show",
        }
    }
}

/// Dispatch table from token spelling to operator
#[derive(Debug, Clone)]
pub struct Registry {
    table: FxHashMap<&'static str, Operator>,
}

impl Registry {
    pub fn new() -> Self {
        let table = Operator::ALL
            .iter()
            .map(|op| (op.symbol(), *op))
            .collect();
        Registry { table }
    }

    /// Look up a token; `None` means it is not an operator
    pub fn lookup(&self, token: &str) -> Option<Operator> {
        self.table.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_is_registered() {
        let registry = Registry::new();
        assert_eq!(registry.len(), Operator::ALL.len());
        for op in Operator::ALL {
            assert_eq!(registry.lookup(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = Registry::new();
        assert_eq!(
            registry.lookup("sqrt"),
            Some(Operator::Unary(UnaryOp::Sqrt))
        );
        assert_eq!(registry.lookup("SQRT"), None);
        assert_eq!(registry.lookup("Clear"), None);
        assert_eq!(registry.lookup("++"), None);
    }

    #[test]
    fn test_arity_follows_variant() {
        let registry = Registry::new();
        assert_eq!(registry.lookup("^").map(|op| op.arity()), Some(2));
        assert_eq!(registry.lookup("fib").map(|op| op.arity()), Some(1));
        assert_eq!(registry.lookup("show").map(|op| op.arity()), Some(0));
    }
}
