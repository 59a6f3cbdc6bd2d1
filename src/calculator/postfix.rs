/// Infix-to-postfix conversion.
///
/// Implements the shunting-yard algorithm, resolving operator precedence and
/// associativity with an explicit operator stack.
pub mod convert;

/// Postfix evaluation.
///
/// Runs a postfix token sequence on a value stack and reports malformed
/// sequences.
pub mod eval;
