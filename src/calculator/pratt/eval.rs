use crate::{
    ast::{BinaryOperator, Expr},
    error::{EvalError, EvalResult},
};

/// Evaluates an abstract syntax tree.
///
/// The tree is walked post-order: both children are evaluated before their
/// operator combines them. Division checks the right operand for exact zero
/// before dividing; exponentiation uses `f64::powf` with the same semantics
/// as the postfix evaluator.
///
/// # Parameters
/// - `node`: The root of the (sub)tree to evaluate.
///
/// # Returns
/// The computed value, or `EvalError::DivisionByZero`.
///
/// # Examples
/// ```
/// use calcyard::calculator::{
///     lexer::tokenize,
///     pratt::{eval::evaluate_ast, parser::PrattParser},
/// };
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// let ast = PrattParser::new(&tokens).parse_expression(0).unwrap();
/// assert_eq!(evaluate_ast(&ast).unwrap(), 512.0);
/// ```
pub fn evaluate_ast(node: &Expr) -> EvalResult<f64> {
    match node {
        Expr::Number { value } => Ok(*value),

        Expr::Negate { operand } => Ok(-evaluate_ast(operand)?),

        Expr::BinaryOp { left, op, right } => {
            let a = evaluate_ast(left)?;
            let b = evaluate_ast(right)?;

            match op {
                BinaryOperator::Add => Ok(a + b),
                BinaryOperator::Sub => Ok(a - b),
                BinaryOperator::Mul => Ok(a * b),
                BinaryOperator::Div => {
                    if b == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(a / b)
                },
                BinaryOperator::Pow => Ok(a.powf(b)),
            }
        },
    }
}
