/// Pratt parsing.
///
/// Builds the abstract syntax tree with binding-power-driven recursive
/// descent over an explicit token cursor.
pub mod parser;

/// AST evaluation.
///
/// Walks the tree produced by the parser bottom-up and computes the result.
pub mod eval;
