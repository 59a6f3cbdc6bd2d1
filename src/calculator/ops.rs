use crate::{ast::BinaryOperator, calculator::lexer::Token};

/// Operator associativity.
///
/// Left-associative operators of equal precedence group leftward
/// (`1-2-3` is `(1-2)-3`); right-associative operators group rightward
/// (`2^3^2` is `2^(3^2)`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assoc {
    /// Groups leftward.
    Left,
    /// Groups rightward.
    Right,
}

/// Binding power used when parsing the unary prefix operators `+` and `-`.
///
/// It exceeds every left binding power, so a prefix operator captures only
/// the term immediately after it: `-3 + 4` parses as `(-3) + 4`.
pub const PREFIX_BINDING_POWER: u8 = 5;

/// Returns the precedence of a binary operator.
///
/// The table is fixed: `+` and `-` have precedence 2, `*` and `/` have 3,
/// and `^` has 4.
#[must_use]
pub const fn precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => 2,
        BinaryOperator::Mul | BinaryOperator::Div => 3,
        BinaryOperator::Pow => 4,
    }
}

/// Returns the associativity of a binary operator.
///
/// Only exponentiation is right-associative.
#[must_use]
pub const fn associativity(op: BinaryOperator) -> Assoc {
    match op {
        BinaryOperator::Pow => Assoc::Right,
        _ => Assoc::Left,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all non-operator tokens (numbers, parentheses).
///
/// # Example
/// ```
/// use calcyard::{
///     ast::BinaryOperator,
///     calculator::{lexer::Token, ops::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Returns the left binding power of a token for the Pratt parser.
///
/// Binding powers are derived from the shared precedence table as
/// `precedence - 1`: `+`,`-` bind at 1, `*`,`/` at 2, `^` at 3. Every
/// non-operator token binds at 0, which terminates the parse loop.
///
/// # Example
/// ```
/// use calcyard::calculator::{lexer::Token, ops::left_binding_power};
///
/// assert_eq!(left_binding_power(&Token::Plus), 1);
/// assert_eq!(left_binding_power(&Token::Caret), 3);
/// assert_eq!(left_binding_power(&Token::RParen), 0);
/// ```
#[must_use]
pub const fn left_binding_power(token: &Token) -> u8 {
    match token_to_binary_operator(token) {
        Some(op) => precedence(op) - 1,
        None => 0,
    }
}

/// Returns the binding power a binary operator recurses with on its right.
///
/// Left-associative operators recurse at their own left binding power, so an
/// equal-precedence operator to the right does not bind and the expression
/// folds left. Exponentiation recurses one below its left binding power, so
/// a chained `^` to the right still binds and the expression folds right.
#[must_use]
pub const fn right_binding_power(op: BinaryOperator) -> u8 {
    match associativity(op) {
        Assoc::Left => precedence(op) - 1,
        Assoc::Right => precedence(op) - 2,
    }
}
