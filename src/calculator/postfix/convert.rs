use crate::{
    calculator::{
        lexer::Token,
        ops::{self, Assoc},
    },
    error::{ParseError, ParseResult},
};

/// Converts an infix token sequence to postfix (reverse Polish) order.
///
/// The shunting-yard algorithm: numbers go straight to the output, `(` is
/// pushed onto the operator stack, `)` unwinds the stack to the matching
/// `(`, and a binary operator first pops every stacked operator that binds
/// at least as tightly (strictly more tightly for the right-associative
/// `^`). The output contains only numbers and binary operators, never
/// parentheses.
///
/// There is no unary rule here: a leading `-` passes through as a binary
/// operator and the evaluator reports the missing operand. Prefix operators
/// are a feature of the Pratt strategy.
///
/// # Parameters
/// - `tokens`: The infix token sequence.
///
/// # Returns
/// The postfix sequence, or `ParseError::MismatchedParentheses` when the
/// parentheses do not pair up.
///
/// # Examples
/// ```
/// use calcyard::calculator::{lexer::tokenize, postfix::convert::to_postfix};
///
/// // 1 + 2 * 3  becomes  1 2 3 * +
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered.join(" "), "1 2 3 * +");
///
/// assert!(to_postfix(&tokenize("1 + 2)").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens.iter().cloned() {
        match ops::token_to_binary_operator(&token) {
            Some(op) => {
                while let Some(top) = stack.last() {
                    // '(' stays on the stack until its ')' arrives.
                    let top_op = match ops::token_to_binary_operator(top) {
                        Some(top_op) => top_op,
                        None => break,
                    };

                    let pops = match ops::associativity(op) {
                        Assoc::Left => ops::precedence(op) <= ops::precedence(top_op),
                        Assoc::Right => ops::precedence(op) < ops::precedence(top_op),
                    };

                    if !pops {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(token);
            },

            None => match token {
                Token::Number(_) => output.push(token),

                Token::LParen => stack.push(token),

                Token::RParen => loop {
                    match stack.pop() {
                        Some(Token::LParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                },

                // Whitespace is skipped by the lexer and never reaches here.
                _ => {},
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}
