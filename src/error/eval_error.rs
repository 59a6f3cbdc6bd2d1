/// Result type used by the postfix evaluator and the AST evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// An operator was applied with fewer than two values available.
    InsufficientOperands {
        /// The operator that was missing an operand.
        operator: String,
    },
    /// Attempted division by exactly zero.
    DivisionByZero,
    /// A token without a binary operator mapping reached the evaluator.
    UnknownOperator {
        /// The offending symbol.
        symbol: String,
    },
    /// The postfix sequence did not reduce to a single value.
    InvalidExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator } => {
                write!(f, "Insufficient operands for operator '{operator}'.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownOperator { symbol } => {
                write!(f, "Unknown operator: {symbol}.")
            },

            Self::InvalidExpression => write!(f, "Invalid expression."),
        }
    }
}

impl std::error::Error for EvalError {}
