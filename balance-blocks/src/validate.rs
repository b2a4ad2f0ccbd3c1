//! Decides whether a proposed move is legal.
//!
//! The rules enforce the order in which a linear equation is solved by hand: first move the
//! standalone constants, then divide by the coefficient, combining variable terms whenever both
//! sides hold one. Blocks whose meaning depends on their neighbour (a coefficient and the
//! variable it multiplies) can never be reordered on their own side.

use crate::{
    classify::{self, Role},
    model::{Block, EquationState, Side},
};
use std::fmt;

/// The reason a move was rejected. The [`Display`](fmt::Display) implementation gives the
/// message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// A variable was dragged away from its coefficient on the same side.
    ReorderTermVariable,

    /// The move would leave one side without any block.
    EmptySide,

    /// A paired variable was moved to a side without a variable to combine with.
    MoveCoefficientFirst,

    /// A coefficient was dragged away from its variable on the same side.
    ReorderCoefficient,

    /// The coefficient is zero, so it cannot become a divisor.
    DivisionByZero,

    /// A coefficient was moved while its side still has standalone constants.
    MoveConstantsFirst,

    /// A coefficient was moved to a side that has a variable; the whole term should be moved
    /// instead.
    CombineLikeTerms,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::ReorderTermVariable => "reordering the term variable on the same side changes its meaning",
            Self::EmptySide => "cannot leave a side empty",
            Self::MoveCoefficientFirst => "move the coefficient first",
            Self::ReorderCoefficient => "reordering the coefficient on the same side changes its meaning",
            Self::DivisionByZero => "division by zero",
            Self::MoveConstantsFirst => "move the standalone constant terms first",
            Self::CombineLikeTerms => "use the variable term to combine like terms instead",
        };
        f.write_str(message)
    }
}

impl std::error::Error for Rejection {}

/// The outcome of a validation in the shape UI code consumes: a flag and an optional reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCheck {
    pub valid: bool,
    pub reason: Option<Rejection>,
}

impl From<Result<(), Rejection>> for MoveCheck {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self { valid: true, reason: None },
            Err(rejection) => Self { valid: false, reason: Some(rejection) },
        }
    }
}

/// Checks whether moving `block` from the `from` side to the `to` side is legal. Moving a block
/// to the side it is already on reorders it.
///
/// The checks run in a fixed order and the first failing one is reported.
pub fn validate_move(
    block: &Block,
    from: Side,
    to: Side,
    equation: &EquationState,
) -> Result<(), Rejection> {
    let origin = equation.side(from);
    let target = equation.side(to);
    let role = classify::role_of(origin, block.id);

    if role == Some(Role::PairedVariable) {
        if from == to {
            return Err(Rejection::ReorderTermVariable);
        }
        // the coefficient leaves together with the variable
        if origin.block_count() <= 2 {
            return Err(Rejection::EmptySide);
        }
        if classify::has_variable(target) {
            return Ok(());
        }
        return Err(Rejection::MoveCoefficientFirst);
    }

    if origin.block_count() <= 1 {
        return Err(Rejection::EmptySide);
    }

    if role == Some(Role::Coefficient) {
        if from == to {
            return Err(Rejection::ReorderCoefficient);
        }
        if block.value == 0.0 {
            return Err(Rejection::DivisionByZero);
        }
        if classify::has_standalone_constant(origin) {
            return Err(Rejection::MoveConstantsFirst);
        }
        if classify::has_variable(target) {
            return Err(Rejection::CombineLikeTerms);
        }
    }

    Ok(())
}

/// Returns true if the coefficient can legally move on its own to either side. When it cannot,
/// it is displayed grouped with its variable as a single unit.
pub fn can_coefficient_be_moved(coefficient: &Block, from: Side, equation: &EquationState) -> bool {
    validate_move(coefficient, from, Side::Left, equation).is_ok()
        || validate_move(coefficient, from, Side::Right, equation).is_ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::model::{BlockId, EquationBuilder, Sign};
    use super::*;

    fn check(equation: &EquationState, id: BlockId, from: Side, to: Side) -> Result<(), Rejection> {
        let (side, block) = equation.locate(id).unwrap();
        assert_eq!(side, from, "test block is on the wrong side");
        validate_move(block, from, to, equation)
    }

    #[test]
    fn constant_left_to_right() {
        let mut eq = EquationBuilder::new();
        eq.variable(Side::Left, 2.0, Sign::Positive);
        let five = eq.constant(Side::Left, 5.0);
        eq.constant(Side::Right, 7.0);
        let eq = eq.build(1.0);

        assert_eq!(check(&eq, five, Side::Left, Side::Right), Ok(()));
    }

    #[test]
    fn constant_right_to_left() {
        let mut eq = EquationBuilder::new();
        eq.variable(Side::Left, 2.0, Sign::Positive);
        let five = eq.constant(Side::Right, 5.0);
        eq.constant(Side::Right, 3.0);
        let eq = eq.build(4.0);

        assert_eq!(check(&eq, five, Side::Right, Side::Left), Ok(()));
    }

    #[test]
    fn bare_variable_across() {
        let mut eq = EquationBuilder::new();
        let x = eq.x(Side::Left);
        eq.constant(Side::Left, 1.0);
        eq.x(Side::Right);
        eq.constant(Side::Right, 5.0);
        let eq = eq.build(0.0);

        assert_eq!(check(&eq, x, Side::Left, Side::Right), Ok(()));
    }

    #[test]
    fn reorder_term_variable() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, -5.0);
        let x = eq.x(Side::Left);
        eq.constant(Side::Left, 5.0);
        eq.constant(Side::Right, 45.0);
        let eq = eq.build(-8.0);

        let err = check(&eq, x, Side::Left, Side::Left).unwrap_err();
        assert_eq!(err, Rejection::ReorderTermVariable);
        assert_eq!(err.to_string(), "reordering the term variable on the same side changes its meaning");
    }

    #[test]
    fn term_variable_would_empty_origin() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        let x = eq.x(Side::Left);
        eq.constant(Side::Right, 4.0);
        eq.x(Side::Right);
        eq.constant(Side::Right, 3.0);
        let eq = eq.build(-1.5);

        let err = check(&eq, x, Side::Left, Side::Right).unwrap_err();
        assert_eq!(err, Rejection::EmptySide);
        assert_eq!(err.to_string(), "cannot leave a side empty");
    }

    #[test]
    fn term_variable_needs_variable_on_target() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        let x = eq.x(Side::Left);
        eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 7.0);
        let eq = eq.build(2.0);

        let err = check(&eq, x, Side::Left, Side::Right).unwrap_err();
        assert_eq!(err, Rejection::MoveCoefficientFirst);
        assert_eq!(err.to_string(), "move the coefficient first");
    }

    #[test]
    fn term_variable_combines_with_target_variable() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 4.0);
        let x = eq.x(Side::Right);
        eq.constant(Side::Right, 5.0);
        let eq = eq.build(-1.0);

        assert_eq!(check(&eq, x, Side::Right, Side::Left), Ok(()));
    }

    #[test]
    fn only_block_on_side() {
        let mut eq = EquationBuilder::new();
        eq.x(Side::Left);
        eq.constant(Side::Left, 0.0);
        let five = eq.constant(Side::Right, 5.0);
        let eq = eq.build(5.0);

        assert_eq!(check(&eq, five, Side::Right, Side::Left), Err(Rejection::EmptySide));
    }

    #[test]
    fn reorder_coefficient() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 5.0);
        eq.constant(Side::Right, 7.0);
        let eq = eq.build(1.0);

        let err = check(&eq, two, Side::Left, Side::Left).unwrap_err();
        assert_eq!(err, Rejection::ReorderCoefficient);
        assert_eq!(err.to_string(), "reordering the coefficient on the same side changes its meaning");
    }

    #[test]
    fn zero_coefficient() {
        let mut eq = EquationBuilder::new();
        let zero = eq.constant(Side::Left, 0.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 6.0);
        let eq = eq.build(0.0);

        let err = check(&eq, zero, Side::Left, Side::Right).unwrap_err();
        assert_eq!(err, Rejection::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn coefficient_before_constants() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 7.0);
        let eq = eq.build(2.0);

        let err = check(&eq, two, Side::Left, Side::Right).unwrap_err();
        assert_eq!(err, Rejection::MoveConstantsFirst);
        assert_eq!(err.to_string(), "move the standalone constant terms first");
    }

    #[test]
    fn coefficient_before_constants_on_both_sides() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 1.0);
        let four = eq.constant(Side::Right, 4.0);
        eq.x(Side::Right);
        eq.constant(Side::Right, 3.0);
        let eq = eq.build(-1.0);

        assert_eq!(check(&eq, two, Side::Left, Side::Right), Err(Rejection::MoveConstantsFirst));
        assert_eq!(check(&eq, four, Side::Right, Side::Left), Err(Rejection::MoveConstantsFirst));
    }

    #[test]
    fn coefficient_onto_variable_side() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 4.0);
        eq.x(Side::Right);
        let eq = eq.build(0.0);

        let err = check(&eq, two, Side::Left, Side::Right).unwrap_err();
        assert_eq!(err, Rejection::CombineLikeTerms);
        assert_eq!(err.to_string(), "use the variable term to combine like terms instead");
    }

    #[test]
    fn coefficient_becomes_divisor() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 6.0);
        let eq = eq.build(3.0);

        assert_eq!(check(&eq, two, Side::Left, Side::Right), Ok(()));
    }

    #[test]
    fn zero_placeholder_does_not_block_coefficient() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 0.0);
        eq.constant(Side::Right, 6.0);
        let eq = eq.build(3.0);

        assert_eq!(check(&eq, two, Side::Left, Side::Right), Ok(()));
    }

    #[test]
    fn move_check_view() {
        assert_eq!(MoveCheck::from(Ok(())), MoveCheck { valid: true, reason: None });
        assert_eq!(
            MoveCheck::from(Err(Rejection::EmptySide)),
            MoveCheck { valid: false, reason: Some(Rejection::EmptySide) },
        );
    }

    #[test]
    fn coefficient_grouping() {
        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 7.0);
        let blocked = eq.build(2.0);

        let (_, coefficient) = blocked.locate(two).unwrap();
        assert!(!can_coefficient_be_moved(coefficient, Side::Left, &blocked));

        let mut eq = EquationBuilder::new();
        let two = eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 6.0);
        let free = eq.build(3.0);

        let (_, coefficient) = free.locate(two).unwrap();
        assert!(can_coefficient_be_moved(coefficient, Side::Left, &free));
    }
}
