use crate::{
    ast::Expr,
    calculator::{lexer::Token, ops},
    error::{ParseError, ParseResult},
};

/// A Pratt (precedence-climbing) parser over a token slice.
///
/// The parser keeps an explicit cursor into the slice instead of shared
/// mutable state, which keeps it re-entrant and testable in isolation. One
/// parser instance performs a single parse of one complete expression
/// starting at position 0; after [`parse_expression`](Self::parse_expression)
/// returns, the caller should check [`peek`](Self::peek) for leftover
/// tokens.
#[derive(Debug)]
pub struct PrattParser<'a> {
    tokens: &'a [Token],
    pos:    usize,
}

impl<'a> PrattParser<'a> {
    /// Creates a parser positioned at the start of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the token at the cursor without consuming it.
    ///
    /// `None` means the input is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parses one expression whose infix operators bind tighter than
    /// `min_bp`.
    ///
    /// Reads one prefix term via `nud` (null denotation), then repeatedly
    /// consumes infix operators whose left binding power exceeds `min_bp`,
    /// combining via `led` (left denotation). The top-level call passes 0.
    ///
    /// # Parameters
    /// - `min_bp`: Minimum binding power an infix operator must exceed to be
    ///   consumed by this invocation.
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Examples
    /// ```
    /// use calcyard::calculator::{lexer::tokenize, pratt::parser::PrattParser};
    ///
    /// let tokens = tokenize("1 + 2 * 3").unwrap();
    /// let mut parser = PrattParser::new(&tokens);
    /// let ast = parser.parse_expression(0).unwrap();
    ///
    /// assert!(parser.peek().is_none());
    /// ```
    pub fn parse_expression(&mut self, min_bp: u8) -> ParseResult<Expr> {
        let token = self.advance().ok_or_else(end_of_input)?;
        let mut left = self.nud(token)?;

        while let Some(next) = self.peek() {
            if ops::left_binding_power(next) <= min_bp {
                break;
            }
            let operator = self.advance().ok_or_else(end_of_input)?;
            left = self.led(operator, left)?;
        }

        Ok(left)
    }

    /// Null denotation: parses a prefix term.
    ///
    /// A number becomes a leaf; `(` parses a full sub-expression (binding
    /// power reset to 0) and requires the matching `)`; unary `+` re-parses
    /// at the prefix binding power and returns the sub-result unchanged;
    /// unary `-` does the same and wraps the result in `Negate`.
    fn nud(&mut self, token: &Token) -> ParseResult<Expr> {
        match token {
            Token::Number(value) => Ok(Expr::Number { value: *value }),

            Token::LParen => {
                let expr = self.parse_expression(0)?;
                match self.advance() {
                    Some(Token::RParen) => Ok(expr),
                    _ => Err(ParseError::MismatchedParentheses),
                }
            },

            Token::Plus => self.parse_expression(ops::PREFIX_BINDING_POWER),

            Token::Minus => {
                let operand = self.parse_expression(ops::PREFIX_BINDING_POWER)?;
                Ok(Expr::Negate { operand: Box::new(operand) })
            },

            other => Err(ParseError::UnexpectedToken { found: other.to_string() }),
        }
    }

    /// Left denotation: combines `left` with the expression after an infix
    /// operator.
    ///
    /// Left-associative operators recurse at their own left binding power;
    /// `^` recurses one lower so that chained exponentiation folds right.
    fn led(&mut self, token: &Token, left: Expr) -> ParseResult<Expr> {
        let op = match ops::token_to_binary_operator(token) {
            Some(op) => op,
            None => return Err(ParseError::UnexpectedToken { found: token.to_string() }),
        };

        let right = self.parse_expression(ops::right_binding_power(op))?;

        Ok(Expr::BinaryOp { left:  Box::new(left),
                            op,
                            right: Box::new(right), })
    }
}

fn end_of_input() -> ParseError {
    ParseError::UnexpectedToken { found: "end of input".to_string() }
}
