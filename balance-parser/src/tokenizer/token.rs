use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("=")]
    Eq,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    #[token(r"\cdot")]
    #[token(r"\times")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("{")]
    OpenCurly,

    #[token("}")]
    CloseCurly,

    #[token(r"\frac")]
    Frac,

    #[token(r"\left")]
    Left,

    #[token(r"\right")]
    Right,

    /// Any other LaTeX command, such as `\sqrt`.
    #[regex(r"\\[a-zA-Z]+")]
    Command,

    #[token("x", priority = 5)]
    Variable,

    /// A run of letters that is not the variable `x`.
    #[regex(r"[a-zA-Z]+")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if a token of this kind begins a factor, allowing it to follow another factor
    /// with no operator in between (`2x`, `3(x + 1)`). Names and unknown commands are included
    /// so that they are reported where they appear.
    pub fn starts_factor(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Variable
                | TokenKind::OpenParen
                | TokenKind::Frac
                | TokenKind::Left
                | TokenKind::Name
                | TokenKind::Command
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
