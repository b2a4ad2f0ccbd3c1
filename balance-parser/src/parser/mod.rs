pub mod error;
pub mod expr;
pub mod linear;

use balance_error::{Error, ErrorKind};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use expr::Spanned;
use std::ops::Range;

/// Operators that may continue a side after a complete factor.
const OPERATORS: &[TokenKind] = &[TokenKind::Add, TokenKind::Sub, TokenKind::Mul, TokenKind::Div];

/// A recursive descent parser over the tokens of a single equation.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns a span covering every non-whitespace token.
    pub fn full_span(&self) -> Range<usize> {
        let mut tokens = self.tokens.iter().filter(|token| !token.is_whitespace());
        match (tokens.next(), tokens.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            (Some(only), None) => only.span.clone(),
            _ => self.eof_span(),
        }
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if there
    /// is none.
    pub fn span(&self) -> Range<usize> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Advances the cursor past any whitespace.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Returns the kind of the last non-whitespace token consumed.
    fn previous_kind(&self) -> Option<TokenKind> {
        self.tokens[..self.cursor.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// Consumes the next token, which must be of the given kind.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'source>, Error> {
        let token = self.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else {
            let expected: &'static [TokenKind] = match kind {
                TokenKind::OpenParen => &[TokenKind::OpenParen],
                TokenKind::CloseParen => &[TokenKind::CloseParen],
                TokenKind::OpenCurly => &[TokenKind::OpenCurly],
                TokenKind::CloseCurly => &[TokenKind::CloseCurly],
                TokenKind::Right => &[TokenKind::Right],
                _ => &[TokenKind::Eq],
            };
            Err(Error::new(vec![token.span], error::UnexpectedToken { expected, found: token.kind }))
        }
    }

    /// Consumes the token closing a group opened by `open`. Running into the end of the input or
    /// the equals sign first reports the group as unclosed.
    pub fn expect_closing(
        &mut self,
        kind: TokenKind,
        open: &Token,
        unclosed: impl ErrorKind + 'static,
    ) -> Result<Token<'source>, Error> {
        match self.peek_kind() {
            None | Some(TokenKind::Eq) => Err(Error::new(vec![open.span.clone()], unclosed)),
            Some(_) => self.expect(kind),
        }
    }

    /// Parses a whole equation, `side = side`, returning both sides.
    pub fn parse_equation(&mut self) -> Result<(Spanned, Spanned), Error> {
        let equals = self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind == TokenKind::Eq)
            .map(|(i, token)| (i, token.span.clone()))
            .collect::<Vec<_>>();

        let (index, span) = match equals.as_slice() {
            [] => return Err(Error::new(vec![self.full_span()], error::MissingEquals)),
            [single] => single.clone(),
            [first, second, ..] => {
                return Err(Error::new(vec![first.1.clone(), second.1.clone()], error::ExtraEquals));
            },
        };

        let is_blank = |tokens: &[Token]| tokens.iter().all(Token::is_whitespace);
        if is_blank(&self.tokens[..index]) || is_blank(&self.tokens[index + 1..]) {
            return Err(Error::new(vec![span], error::EmptySide));
        }

        let left = self.parse_side()?;
        match self.peek_kind() {
            Some(TokenKind::Eq) => {
                self.next_token()?;
            },
            _ => return Err(self.unexpected(&[
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Eq,
            ])),
        }

        let right = self.parse_side()?;
        if self.peek_kind().is_some() {
            return Err(self.unexpected(OPERATORS));
        }

        Ok((left, right))
    }

    /// Creates an error for the next token, which is none of the expected ones.
    fn unexpected(&mut self, expected: &'static [TokenKind]) -> Error {
        match self.peek_kind() {
            Some(found) => self.error(error::UnexpectedToken { expected, found }),
            None => self.error(error::UnexpectedEof),
        }
    }
}
