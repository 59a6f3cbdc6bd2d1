/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` is produced by the Pratt parser and consumed by the AST evaluator.
/// Each node owns its children exclusively, so the structure is a tree with
/// no sharing and no cycles; it lives only for the duration of one
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Unary negation (e.g. `-x`).
    Negate {
        /// The operand being negated.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// The five arithmetic operators shared by both evaluation strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
