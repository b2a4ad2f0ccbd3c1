//! The grammar of one side of an equation.
//!
//! ```text
//! side    := product (('+' | '-') product)*
//! product := unary (('*' | '/' | <implicit>) unary)*
//! unary   := ('-' | '+') unary | primary
//! primary := number | 'x' | '(' side ')' | '\left' '(' side '\right' ')'
//!          | '\frac' '{' side '}' '{' side '}'
//! ```
//!
//! `\cdot` and `\times` are read as `*`. Every rule evaluates directly to a [`Linear`] form.

use balance_error::Error;
use crate::tokenizer::TokenKind;
use std::ops::Range;
use super::{
    error,
    linear::{CombineError, Linear},
    Parser,
    OPERATORS,
};

/// Tokens that can begin a primary expression.
const PRIMARY: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Variable,
    TokenKind::OpenParen,
    TokenKind::Frac,
    TokenKind::Left,
];

/// The value of a parsed expression and the region of source code it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub value: Linear,
    pub span: Range<usize>,
}

/// Converts a failure to combine two forms into an error pointing at the given span.
fn combine_error(err: CombineError, span: Range<usize>) -> Error {
    match err {
        CombineError::NonLinear => Error::new(vec![span], error::NonLinear),
        CombineError::DivisionByZero => Error::new(vec![span], error::DivisionByZero),
    }
}

impl Parser<'_> {
    /// Parses a sum of products.
    pub fn parse_side(&mut self) -> Result<Spanned, Error> {
        let mut lhs = self.parse_product()?;

        while let Some(op @ (TokenKind::Add | TokenKind::Sub)) = self.peek_kind() {
            self.next_token()?;
            let rhs = self.parse_product()?;
            let value = if op == TokenKind::Add {
                lhs.value + rhs.value
            } else {
                lhs.value - rhs.value
            };
            lhs = Spanned { value, span: lhs.span.start..rhs.span.end };
        }

        Ok(lhs)
    }

    /// Parses a product of factors, where adjacent factors multiply.
    pub fn parse_product(&mut self) -> Result<Spanned, Error> {
        let mut lhs = self.parse_unary()?;

        loop {
            let divide = match self.peek_kind() {
                Some(TokenKind::Mul) => {
                    self.next_token()?;
                    false
                },
                Some(TokenKind::Div) => {
                    self.next_token()?;
                    true
                },
                Some(TokenKind::Exp) => return Err(self.error(error::Exponent)),
                // `2 3` is not a product
                Some(TokenKind::Number) if self.previous_kind() == Some(TokenKind::Number) => {
                    return Err(self.unexpected(OPERATORS));
                },
                Some(kind) if kind.starts_factor() => false,
                _ => break,
            };

            let rhs = self.parse_unary()?;
            let span = lhs.span.start..rhs.span.end;
            let value = if divide {
                lhs.value.checked_div(rhs.value).map_err(|err| combine_error(err, rhs.span))?
            } else {
                lhs.value.checked_mul(rhs.value).map_err(|err| combine_error(err, span.clone()))?
            };
            lhs = Spanned { value, span };
        }

        Ok(lhs)
    }

    /// Parses a factor with any number of leading signs.
    pub fn parse_unary(&mut self) -> Result<Spanned, Error> {
        match self.peek_kind() {
            Some(kind @ (TokenKind::Add | TokenKind::Sub)) => {
                let op = self.next_token()?;
                let operand = self.parse_unary()?;
                let value = if kind == TokenKind::Sub { -operand.value } else { operand.value };
                Ok(Spanned { value, span: op.span.start..operand.span.end })
            },
            _ => self.parse_primary(),
        }
    }

    /// Parses a number, the variable, or a grouped expression.
    pub fn parse_primary(&mut self) -> Result<Spanned, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number => {
                // `1.2.3` lexes as `1.2` directly followed by `.3`
                if let Some(next) = self.tokens.get(self.cursor).filter(|next| next.kind == TokenKind::Number) {
                    return Err(Error::new(vec![token.span.start..next.span.end], error::InvalidNumber));
                }
                let value = token.lexeme
                    .parse::<f64>()
                    .map_err(|_| Error::new(vec![token.span.clone()], error::InvalidNumber))?;
                Ok(Spanned { value: Linear::constant(value), span: token.span })
            },
            TokenKind::Variable => Ok(Spanned { value: Linear::X, span: token.span }),
            TokenKind::OpenParen => {
                let inner = self.parse_side()?;
                let close = self.expect_closing(TokenKind::CloseParen, &token, error::UnclosedParenthesis)?;
                Ok(Spanned { value: inner.value, span: token.span.start..close.span.end })
            },
            TokenKind::Left => {
                self.expect(TokenKind::OpenParen)?;
                let inner = self.parse_side()?;
                self.expect_closing(TokenKind::Right, &token, error::UnclosedParenthesis)?;
                let close = self.expect(TokenKind::CloseParen)?;
                Ok(Spanned { value: inner.value, span: token.span.start..close.span.end })
            },
            TokenKind::Frac => {
                let numerator = self.parse_braced()?;
                let denominator = self.parse_braced()?;
                let value = numerator.value
                    .checked_div(denominator.value)
                    .map_err(|err| combine_error(err, denominator.span.clone()))?;
                Ok(Spanned { value, span: token.span.start..denominator.span.end })
            },
            TokenKind::Name => Err(Error::new(
                vec![token.span],
                error::UnknownName { name: token.lexeme.to_string() },
            )),
            TokenKind::Command => Err(Error::new(
                vec![token.span],
                error::UnsupportedCommand { command: token.lexeme.to_string() },
            )),
            found => Err(Error::new(
                vec![token.span],
                error::UnexpectedToken { expected: PRIMARY, found },
            )),
        }
    }

    /// Parses a `{ side }` argument of `\frac`. The span includes the braces.
    fn parse_braced(&mut self) -> Result<Spanned, Error> {
        let open = self.expect(TokenKind::OpenCurly)?;
        let inner = self.parse_side()?;
        let close = self.expect_closing(TokenKind::CloseCurly, &open, error::UnclosedCurly)?;
        Ok(Spanned { value: inner.value, span: open.span.start..close.span.end })
    }
}
