use logos::Logos;

use crate::error::{ParseError, ParseResult};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Number literal tokens, such as `42`, `3.14`, or `.5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, and newlines.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Parses a number literal from the current token slice.
///
/// A literal is a maximal run of digits and decimal points. Runs with more
/// than one decimal point (or no digits at all, such as `"."`) are rejected.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return None;
    }
    slice.parse().ok()
}

/// Tokenizes an expression string.
///
/// Whitespace is skipped. Adjacent number literals separated by whitespace
/// (e.g. `"1 2"`) are deliberately accepted here as two tokens; rejecting
/// them is deferred to the downstream converter or parser.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The tokens in left-to-right input order, or a `ParseError` identifying
/// the offending fragment.
///
/// # Examples
/// ```
/// use calcyard::calculator::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Plus);
///
/// assert!(tokenize("1 & 2").is_err());
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let slice = lexer.slice();
                // A rejected digit-and-dot run is a malformed literal; any
                // other unmatched slice is an invalid character.
                if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    return Err(ParseError::InvalidNumber { literal: slice.to_string() });
                }
                let found = slice.chars().next().unwrap_or(' ');
                return Err(ParseError::InvalidCharacter { found });
            },
        }
    }

    Ok(tokens)
}
