/// The lexer module tokenizes an expression string.
///
/// The lexer (tokenizer) reads the raw input text and produces a sequence of
/// tokens: number literals, the five arithmetic operators, and parentheses.
/// This is the first stage of both evaluation strategies.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Validates number literals (at most one decimal point).
/// - Reports lexical errors for invalid characters.
pub mod lexer;
/// The operator table shared by both strategies.
///
/// Declares precedence and associativity for the five binary operators, and
/// derives the Pratt binding powers from the same table.
///
/// # Responsibilities
/// - Maps tokens to binary operators.
/// - Provides precedence/associativity for the shunting-yard converter.
/// - Provides left and right binding powers for the Pratt parser.
pub mod ops;
/// The shunting-yard evaluation strategy.
///
/// Converts the infix token sequence to postfix (reverse Polish) order and
/// evaluates the result with a value stack.
///
/// # Responsibilities
/// - Resolves precedence and associativity with an operator stack.
/// - Detects mismatched parentheses and malformed postfix sequences.
pub mod postfix;
/// The Pratt evaluation strategy.
///
/// Parses the token sequence into an abstract syntax tree with
/// binding-power-driven recursive descent, then evaluates the tree
/// bottom-up.
///
/// # Responsibilities
/// - Resolves precedence and associativity through binding powers.
/// - Supports the unary prefix operators `+` and `-`.
pub mod pratt;
