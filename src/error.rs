/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing an
/// expression. Parse errors include invalid characters, malformed number
/// literals, mismatched parentheses, and unexpected or leftover tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence or an abstract syntax tree, such as division by zero or a
/// missing operand.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
pub use parse_error::{ParseError, ParseResult};

#[derive(Debug)]
/// The error type returned by the crate's entry points.
///
/// Both evaluation strategies surface their failures through this type: the
/// parse stage and the evaluation stage each have their own enum, and this
/// wrapper records which stage failed.
pub enum Error {
    /// The expression failed to tokenize or parse.
    Parse(ParseError),
    /// The expression parsed, but evaluation failed.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
