//! Numeric evaluation of equation sides.

use crate::{
    classify,
    model::{EquationState, Expression, Term},
};

/// The sum of the effective coefficients of every variable term on the side.
pub fn variable_coefficient(side: &Expression) -> f64 {
    side.terms().iter().filter_map(Term::effective_coefficient).sum()
}

/// The sum of every standalone constant on the side.
pub fn constant_sum(side: &Expression) -> f64 {
    classify::standalone_constant_sum(side)
}

/// Evaluates the side with the variable set to `x`.
pub fn evaluate_at(side: &Expression, x: f64) -> f64 {
    variable_coefficient(side) * x + constant_sum(side)
}

/// The line `y = a x + c` (written `a x + b y + c = 0` with `b = -1`) obtained by moving
/// everything to the left side. Its root is the solution of the equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Computes the [`LineCoefficients`] of the equation.
pub fn line_coefficients(equation: &EquationState) -> LineCoefficients {
    LineCoefficients {
        a: variable_coefficient(&equation.left) - variable_coefficient(&equation.right),
        b: -1.0,
        c: constant_sum(&equation.left) - constant_sum(&equation.right),
    }
}

impl EquationState {
    /// `left(x) - right(x)`. Zero when `x` solves the equation.
    pub fn residual(&self, x: f64) -> f64 {
        evaluate_at(&self.left, x) - evaluate_at(&self.right, x)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use crate::model::{EquationBuilder, Side, Sign};
    use super::*;

    #[test]
    fn evaluates_terms() {
        // 3x + 2 - x(coefficient 4)
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 3.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 2.0);
        eq.variable(Side::Right, 4.0, Sign::Negative);
        let eq = eq.build(-0.2857);

        assert_eq!(evaluate_at(&eq.left, 2.0), 8.0);
        assert_eq!(evaluate_at(&eq.right, 2.0), -8.0);
        assert_eq!(variable_coefficient(&eq.right), -4.0);
    }

    #[test]
    fn paired_variable_ignores_own_coefficient() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        eq.variable(Side::Left, 7.0, Sign::Negative);
        eq.constant(Side::Right, 1.0);
        let eq = eq.build(0.5);

        assert_eq!(variable_coefficient(&eq.left), 2.0);
    }

    #[test]
    fn line() {
        // 2x + 3 = 4x + 5
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 4.0);
        eq.x(Side::Right);
        eq.constant(Side::Right, 5.0);
        let eq = eq.build(-1.0);

        assert_eq!(line_coefficients(&eq), LineCoefficients { a: -2.0, b: -1.0, c: -2.0 });
        assert_abs_diff_eq!(eq.residual(-1.0), 0.0);
    }
}
