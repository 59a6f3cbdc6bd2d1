/// Result type used by the tokenizer, the postfix converter, and the Pratt
/// parser.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found a character that is not part of the expression grammar.
    InvalidCharacter {
        /// The character encountered.
        found: char,
    },
    /// A number literal was malformed, e.g. it contained two decimal points.
    InvalidNumber {
        /// The literal text as it appeared in the input.
        literal: String,
    },
    /// Parentheses did not pair up.
    MismatchedParentheses,
    /// Found an unexpected token where an operand or operator was required.
    UnexpectedToken {
        /// The token encountered, or "end of input".
        found: String,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingInput {
        /// The first leftover token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found } => {
                write!(f, "Invalid character: '{found}'.")
            },

            Self::InvalidNumber { literal } => {
                write!(f, "Invalid number: '{literal}'.")
            },

            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),

            Self::UnexpectedToken { found } => {
                write!(f, "Unexpected token: {found}.")
            },

            Self::UnexpectedTrailingInput { token } => {
                write!(f, "Extra input after the expression: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
