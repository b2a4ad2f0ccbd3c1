//! Kinds of errors that can occur while parsing an equation.

use ariadne::Fmt;
use balance_attrs::ErrorKind;
use balance_error::EXPR;
use crate::tokenizer::TokenKind;

/// The input has no `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "equation must contain an equals sign",
    labels = ["this has no equals sign"],
    help = format!("write it in the form {}", "left = right".fg(EXPR)),
)]
pub struct MissingEquals;

/// The input has more than one `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "equation must contain exactly one equals sign",
    labels = ["first equals sign", "another one here"],
)]
pub struct ExtraEquals;

/// Nothing was written on one side of the `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "left or right side is empty",
    labels = [format!("there must be an {} on both sides of this", "expression".fg(EXPR))],
)]
pub struct EmptySide;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A name other than `x` was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", self.name),
    labels = ["here"],
    help = format!("equations can only be written in the variable {}", "x".fg(EXPR)),
)]
pub struct UnknownName {
    pub name: String,
}

/// A LaTeX command other than the supported ones was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unsupported LaTeX command `{}`", self.command),
    labels = ["here"],
    help = format!("the supported commands are {}", r"\frac, \cdot, \times, \left and \right".fg(EXPR)),
)]
pub struct UnsupportedCommand {
    pub command: String,
}

/// An opening parenthesis was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a closing parenthesis {}", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// An opening curly brace of a `\frac` argument was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed curly brace",
    labels = ["this brace is never closed"],
    help = format!("add a closing brace {}", "}".fg(EXPR)),
)]
pub struct UnclosedCurly;

/// A number literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = ["this number"],
)]
pub struct InvalidNumber;

/// The equation is not linear in `x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "equation is not linear in x",
    labels = ["this term is not linear"],
    note = "only equations of the form `ax + b = cx + d` can be solved with blocks",
)]
pub struct NonLinear;

/// Exponents are never linear.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponents are not supported",
    labels = ["this exponent"],
    note = "only equations of the form `ax + b = cx + d` can be solved with blocks",
)]
pub struct Exponent;

/// A division by a constant expression equal to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// The terms in `x` cancel out, so the equation has no solution or infinitely many.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "could not solve the equation or it has no unique solution in x",
    labels = [format!("the {} terms on both sides cancel out", "x".fg(EXPR))],
)]
pub struct NoUniqueSolution;
