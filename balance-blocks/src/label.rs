//! Human-readable text for blocks, sides and equations.

use crate::model::{Block, BlockKind, EquationState, Expression, Term};
use std::fmt;

/// Where a block sits, which decides whether a leading `+` is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// The block is the first of its side.
    pub is_first: bool,

    /// The block is a variable right after its coefficient, which already carries the sign.
    pub preceded_by_coefficient: bool,
}

/// Formats a number without a negative zero.
fn number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// The label of a single block: `+3`, `-2`, `x`, `-x`, `+4x`.
pub fn block_label(block: &Block, options: LabelOptions) -> String {
    let omit_plus = options.is_first;
    match block.kind {
        BlockKind::Constant => {
            let value = block.signed_value();
            if value >= 0.0 && !omit_plus {
                format!("+{}", number(value))
            } else {
                number(value)
            }
        },
        BlockKind::Variable => {
            let omit_plus = omit_plus || options.preceded_by_coefficient;
            let c = block.own_coefficient();
            if c == 1.0 {
                if omit_plus { "x".to_string() } else { "+x".to_string() }
            } else if c == -1.0 {
                "-x".to_string()
            } else if c >= 0.0 && !omit_plus {
                format!("+{}x", number(c))
            } else {
                format!("{}x", number(c))
            }
        },
    }
}

/// The label of a coefficient and its variable shown as one unit: `2x`, `-3x`, `x`.
pub fn term_label(coefficient: &Block, _variable: &Block) -> String {
    let c = coefficient.signed_value();
    if c == 1.0 {
        "x".to_string()
    } else if c == -1.0 {
        "-x".to_string()
    } else {
        format!("{}x", number(c))
    }
}

/// The label of a whole side, with the terms joined by their signs: `-2x + 1`.
pub fn side_label(side: &Expression) -> String {
    let mut out = String::new();
    for (i, term) in side.terms().iter().enumerate() {
        let first = LabelOptions { is_first: true, ..Default::default() };
        let label = match term {
            Term::Constant(block) | Term::Variable(block) => block_label(block, first),
            Term::Scaled { coefficient, variable } => term_label(coefficient, variable),
        };

        match (i, label.strip_prefix('-')) {
            (0, _) => out.push_str(&label),
            (_, Some(magnitude)) => {
                out.push_str(" - ");
                out.push_str(magnitude);
            },
            (_, None) => {
                out.push_str(" + ");
                out.push_str(&label);
            },
        }
    }
    out
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&side_label(self))
    }
}

impl fmt::Display for EquationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::model::{EquationBuilder, IdAllocator, Side, Sign};
    use super::*;

    const FIRST: LabelOptions = LabelOptions { is_first: true, preceded_by_coefficient: false };
    const AFTER_COEFFICIENT: LabelOptions = LabelOptions { is_first: false, preceded_by_coefficient: true };

    #[test]
    fn constants() {
        let mut ids = IdAllocator::new();
        let three = Block::constant(ids.next_id(), 3.0);
        let minus_half = Block::constant(ids.next_id(), -0.5);

        assert_eq!(block_label(&three, FIRST), "3");
        assert_eq!(block_label(&three, LabelOptions::default()), "+3");
        assert_eq!(block_label(&minus_half, LabelOptions::default()), "-0.5");
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let mut ids = IdAllocator::new();
        let mut zero = Block::constant(ids.next_id(), 0.0);
        zero.sign = Sign::Negative;
        assert_eq!(block_label(&zero, FIRST), "0");
        assert_eq!(block_label(&zero, LabelOptions::default()), "+0");
    }

    #[test]
    fn variables() {
        let mut ids = IdAllocator::new();
        let x = Block::variable(ids.next_id(), 1.0, Sign::Positive);
        let minus_x = Block::variable(ids.next_id(), 1.0, Sign::Negative);
        let four_x = Block::variable(ids.next_id(), 4.0, Sign::Positive);
        let minus_four_x = Block::variable(ids.next_id(), 4.0, Sign::Negative);

        assert_eq!(block_label(&x, FIRST), "x");
        assert_eq!(block_label(&x, LabelOptions::default()), "+x");
        assert_eq!(block_label(&x, AFTER_COEFFICIENT), "x");
        assert_eq!(block_label(&minus_x, FIRST), "-x");
        assert_eq!(block_label(&four_x, LabelOptions::default()), "+4x");
        assert_eq!(block_label(&four_x, FIRST), "4x");
        assert_eq!(block_label(&minus_four_x, LabelOptions::default()), "-4x");
    }

    #[test]
    fn terms() {
        let mut ids = IdAllocator::new();
        let x = Block::variable(ids.next_id(), 1.0, Sign::Positive);
        let two = Block::constant(ids.next_id(), 2.0);
        let minus_three = Block::constant(ids.next_id(), -3.0);
        let one = Block::constant(ids.next_id(), 1.0);
        let minus_one = Block::constant(ids.next_id(), -1.0);

        assert_eq!(term_label(&two, &x), "2x");
        assert_eq!(term_label(&minus_three, &x), "-3x");
        assert_eq!(term_label(&one, &x), "x");
        assert_eq!(term_label(&minus_one, &x), "-x");
    }

    #[test]
    fn equation() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, -2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 1.0);
        eq.constant(Side::Right, 9.0);
        eq.variable(Side::Right, 1.0, Sign::Negative);
        eq.constant(Side::Right, -4.0);
        let eq = eq.build(-4.0);

        assert_eq!(eq.to_string(), "-2x + 1 = 9x - 4");
    }

    #[test]
    fn bare_variable_after_constant() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Left, 0.0);
        eq.constant(Side::Right, 3.5);
        eq.constant(Side::Right, -1.0);
        let eq = eq.build(2.5);

        assert_eq!(eq.to_string(), "x + 0 = 3.5 - 1");
    }
}
