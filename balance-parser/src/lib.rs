//! Reads linear equations in `x` and turns them into blocks.
//!
//! Equations can be written in plain text (`2x + 5 = 12`, `3*(x - 1) = x/2`) or with the LaTeX
//! commands produced by math input fields (`\frac{x}{2} + 3\cdot 4 = 1`). Each side is reduced to
//! the form `ax + b`, the equation is solved for `x`, and every side is laid out as blocks: a
//! coefficient block followed by the variable when `a` is nonzero, then a standalone constant
//! when `b` is nonzero. A side where both are zero becomes a single `0` constant.
//!
//! ```
//! let parsed = balance_parser::parse("2x + 5 = 12").unwrap();
//! assert_eq!(parsed.solution(), 3.5);
//! assert_eq!(parsed.equation.to_string(), "2x + 5 = 12");
//! ```

pub mod parser;
pub mod tokenizer;

use balance_blocks::{EquationBuilder, EquationState, Side};
use balance_error::Error;
use parser::{error, linear::Linear, Parser};

/// A successfully parsed equation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    /// The equation as blocks, with its solution set.
    pub equation: EquationState,

    /// The left side reduced to `ax + b`.
    pub left: Linear,

    /// The right side reduced to `ax + b`.
    pub right: Linear,
}

impl ParsedEquation {
    /// The value of `x` solving the equation.
    pub fn solution(&self) -> f64 {
        self.equation.solution
    }
}

impl From<ParsedEquation> for EquationState {
    fn from(parsed: ParsedEquation) -> Self {
        parsed.equation
    }
}

/// Appends the blocks of a reduced side.
fn push_side(builder: &mut EquationBuilder, side: Side, form: Linear) {
    if form.x != 0.0 {
        builder.constant(side, form.x);
        builder.x(side);
    }
    if form.constant != 0.0 {
        builder.constant(side, form.constant);
    }
    if form.x == 0.0 && form.constant == 0.0 {
        builder.constant(side, 0.0);
    }
}

/// Combined `x` coefficients smaller than this in magnitude count as zero (`0.1x + 0.2x - 0.3x`).
pub const SOLVE_EPSILON: f64 = 1e-9;

/// Parses an equation and solves it for `x`.
///
/// The equation must contain exactly one `=`, be linear in `x`, and have exactly one solution.
pub fn parse(input: &str) -> Result<ParsedEquation, Error> {
    let mut parser = Parser::new(input);
    let (left, right) = parser.parse_equation()?;

    let a = left.value.x - right.value.x;
    if a.abs() < SOLVE_EPSILON {
        return Err(Error::new(vec![parser.full_span()], error::NoUniqueSolution));
    }

    let solution = (right.value.constant - left.value.constant) / a;
    if !solution.is_finite() {
        return Err(Error::new(vec![parser.full_span()], error::NoUniqueSolution));
    }
    // avoid reporting `-0`
    let solution = if solution == 0.0 { 0.0 } else { solution };

    let mut builder = EquationBuilder::new();
    push_side(&mut builder, Side::Left, left.value);
    push_side(&mut builder, Side::Right, right.value);

    Ok(ParsedEquation {
        equation: builder.build(solution),
        left: left.value,
        right: right.value,
    })
}
