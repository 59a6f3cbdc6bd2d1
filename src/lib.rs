//! # calcyard
//!
//! calcyard is an arithmetic expression evaluator written in Rust.
//! It evaluates single-line infix expressions over `+ - * / ^ ( )` and
//! decimal numbers with two independent strategies: a shunting-yard pipeline
//! that converts the token stream to postfix form and runs it on a value
//! stack, and a Pratt (precedence-climbing) parser that builds an abstract
//! syntax tree and walks it. Both strategies share one tokenizer and one
//! operator table, so they can be used to cross-check each other.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::{
        lexer::tokenize,
        postfix::{convert::to_postfix, eval::evaluate_postfix},
        pratt::{eval::evaluate_ast, parser::PrattParser},
    },
    error::{Error, ParseError},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the Pratt parser and traversed by the AST evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for numbers, negation, and binary operations.
/// - Keeps ownership strictly tree-shaped: every node owns its children.
pub mod ast;
/// Orchestrates both evaluation strategies.
///
/// This module ties together the tokenizer, the shared operator table, the
/// shunting-yard postfix pipeline, and the Pratt parsing pipeline. The two
/// pipelines are independent implementations of the same grammar and never
/// call into each other.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, operator table, converter,
///   parser, and evaluators.
/// - Keeps every stage a pure function over its input with no shared state.
pub mod calculator;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. Errors carry the offending
/// character, literal, or token so that callers can produce a readable
/// message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;

/// Evaluates an expression with the shunting-yard strategy.
///
/// The input is tokenized, converted to postfix (reverse Polish) order with
/// the shunting-yard algorithm, and evaluated on a value stack.
///
/// # Errors
/// Returns an error if the expression fails to tokenize, contains mismatched
/// parentheses, or cannot be evaluated (for example a division by zero or a
/// missing operand).
///
/// # Examples
/// ```
/// use calcyard::evaluate_shunting_yard;
///
/// let result = evaluate_shunting_yard("1 + 2 * 3").unwrap();
/// assert_eq!(result, 7.0);
///
/// // Unbalanced parentheses are rejected during conversion.
/// assert!(evaluate_shunting_yard("(1 + 2").is_err());
/// ```
pub fn evaluate_shunting_yard(expression: &str) -> Result<f64, Error> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    Ok(evaluate_postfix(&postfix)?)
}

/// Evaluates an expression with the Pratt (precedence-climbing) strategy.
///
/// The input is tokenized, parsed into an abstract syntax tree, and the tree
/// is walked bottom-up. Unlike the shunting-yard strategy, this one supports
/// the unary prefix operators `+` and `-`.
///
/// # Errors
/// Returns an error if the expression fails to tokenize or parse, if tokens
/// remain after a complete expression, or if evaluation fails (for example a
/// division by zero).
///
/// # Examples
/// ```
/// use calcyard::evaluate_pratt;
///
/// // Exponentiation folds to the right: 2^(3^2).
/// let result = evaluate_pratt("2^3^2").unwrap();
/// assert_eq!(result, 512.0);
///
/// let result = evaluate_pratt("-(3 + 4)").unwrap();
/// assert_eq!(result, -7.0);
/// ```
pub fn evaluate_pratt(expression: &str) -> Result<f64, Error> {
    let tokens = tokenize(expression)?;
    let mut parser = PrattParser::new(&tokens);
    let ast = parser.parse_expression(0)?;

    if let Some(token) = parser.peek() {
        return Err(ParseError::UnexpectedTrailingInput { token: token.to_string() }.into());
    }

    Ok(evaluate_ast(&ast)?)
}
