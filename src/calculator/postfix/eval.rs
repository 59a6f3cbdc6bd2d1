use crate::{
    ast::BinaryOperator,
    calculator::{lexer::Token, ops::token_to_binary_operator},
    error::{EvalError, EvalResult},
};

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed onto a value stack; a binary operator pops two values
/// and pushes the result. Operands pop right-then-left: `b` comes off the
/// stack first, then `a`, and the operator computes `a OP b`. After the last
/// token, exactly one value must remain.
///
/// Division checks the divisor for exact zero before dividing.
/// Exponentiation uses `f64::powf`; non-finite results (e.g. a negative base
/// with a fractional exponent) pass through untrapped.
///
/// # Parameters
/// - `postfix`: A postfix sequence of numbers and binary operators.
///
/// # Returns
/// The computed value, or an `EvalError` describing the failure.
///
/// # Examples
/// ```
/// use calcyard::calculator::{lexer::tokenize, postfix::{convert::to_postfix, eval::evaluate_postfix}};
///
/// let postfix = to_postfix(&tokenize("(1 + 2) * 3").unwrap()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 9.0);
///
/// let postfix = to_postfix(&tokenize("1 / 0").unwrap()).unwrap();
/// assert!(evaluate_postfix(&postfix).is_err());
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        if let Token::Number(value) = token {
            stack.push(*value);
            continue;
        }

        let op = match token_to_binary_operator(token) {
            Some(op) => op,
            None => return Err(EvalError::UnknownOperator { symbol: token.to_string() }),
        };

        let b = pop_operand(&mut stack, op)?;
        let a = pop_operand(&mut stack, op)?;

        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                // Exact-zero check, before the division happens.
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            },
            BinaryOperator::Pow => a.powf(b),
        };

        stack.push(result);
    }

    match stack.pop() {
        Some(result) if stack.is_empty() => Ok(result),
        _ => Err(EvalError::InvalidExpression),
    }
}

fn pop_operand(stack: &mut Vec<f64>, op: BinaryOperator) -> EvalResult<f64> {
    stack.pop()
         .ok_or_else(|| EvalError::InsufficientOperands { operator: op.to_string() })
}
