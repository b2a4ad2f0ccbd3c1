//! Detection of the solved form `x = k`.

use crate::{
    classify,
    eval::variable_coefficient,
    model::{EquationState, Term},
};

/// Tolerance used when comparing coefficients and constants in [`check_victory`].
pub const VICTORY_EPSILON: f64 = 1e-9;

/// Returns true if the equation is in the solved form `x = k`.
///
/// The left side must hold exactly one variable block (optionally behind a coefficient block)
/// and no standalone constant, not even a zero; the right side must be exactly one constant.
/// The effective coefficient of the variable must be `1`, or `-1` when the constant is `0`:
/// simplification writes `-x` as a bare `x`, and `-x = 0` leaves nothing else to move.
pub fn check_victory(equation: &EquationState) -> bool {
    let left_variables = equation.left.blocks().filter(|block| block.is_variable()).count();
    let right_is_single_constant = matches!(equation.right.terms(), [Term::Constant(_)]);
    if left_variables != 1 || !right_is_single_constant {
        return false;
    }

    let left_has_constant = equation.left
        .terms()
        .iter()
        .any(|term| matches!(term, Term::Constant(_)));
    if left_has_constant {
        return false;
    }

    let coefficient = variable_coefficient(&equation.left);
    let constant = classify::standalone_constant_sum(&equation.right);

    (coefficient - 1.0).abs() < VICTORY_EPSILON
        || ((coefficient + 1.0).abs() < VICTORY_EPSILON && constant.abs() < VICTORY_EPSILON)
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{EquationBuilder, Side, Sign},
        simplify::simplify_equation,
    };
    use super::*;

    #[test]
    fn x_equals_constant() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Right, 3.0);
        assert!(check_victory(&eq.build(3.0)));
    }

    #[test]
    fn unit_coefficient_block() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 1.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 3.0);
        assert!(check_victory(&eq.build(3.0)));
    }

    #[test]
    fn non_unit_coefficient() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 6.0);
        assert!(!check_victory(&eq.build(3.0)));
    }

    #[test]
    fn several_right_constants() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Right, 1.0);
        eq.constant(Side::Right, 2.0);
        assert!(!check_victory(&eq.build(3.0)));
    }

    #[test]
    fn variable_on_the_right() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.x(Side::Right);
        assert!(!check_victory(&eq.build(0.0)));

        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Right, 3.0);
        eq.x(Side::Right);
        assert!(!check_victory(&eq.build(0.0)));
    }

    #[test]
    fn constants_only() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 5.0);
        eq.constant(Side::Right, 5.0);
        assert!(!check_victory(&eq.build(0.0)));
    }

    #[test]
    fn zero_left_constant_still_counts() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Left, 0.0);
        eq.constant(Side::Right, 3.0);
        assert!(!check_victory(&eq.build(3.0)));
    }

    #[test]
    fn two_variables_on_the_left() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.x(Side::Left);
        eq.constant(Side::Right, 3.0);
        assert!(!check_victory(&eq.build(1.5)));
    }

    #[test]
    fn after_simplification() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Right, 3.0);
        assert!(check_victory(&simplify_equation(&eq.build(3.0))));
    }

    #[test]
    fn negative_x_equals_zero() {
        let mut eq = EquationBuilder::new();
        eq.variable(Side::Left, 1.0, Sign::Negative);
        eq.constant(Side::Right, 0.0);
        assert!(check_victory(&eq.build(0.0)));
    }

    #[test]
    fn negative_x_equals_nonzero() {
        let mut eq = EquationBuilder::new();
        eq.variable(Side::Left, 1.0, Sign::Negative);
        eq.constant(Side::Right, 4.0);
        assert!(!check_victory(&eq.build(-4.0)));
    }

    #[test]
    fn tolerates_rounding() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 1.0 + 1e-12);
        eq.x(Side::Left);
        eq.constant(Side::Right, 0.1 + 0.2);
        assert!(check_victory(&eq.build(0.3)));
    }
}
