//! Computes the equation that results from a move.
//!
//! There are four kinds of moves:
//!
//! - **Reorder**: the block stays on its side and goes to the end of it.
//! - **Term migration**: a paired variable crosses to a side that has a variable. Its whole term
//! crosses with it, negated (`2x + 3 = 4x + 5` becomes `2x + 3 - 4x = 5`).
//! - **Division**: a coefficient crosses to a side without a variable. The variable stays behind
//! and the target side is replaced by the sum of its constants divided by the coefficient
//! (`2x = 6` becomes `x = 3`).
//! - **Cross**: any other block crosses with its sign flipped (`x + 2 = 4` becomes `x = 4 - 2`).
//!
//! [`apply_move`] does not validate the move. Invalid moves produce an equation that may not be
//! algebraically equivalent, but never panic; gate calls on
//! [`validate_move`](crate::validate::validate_move).

use crate::{
    classify::{self, Role},
    model::{Block, BlockId, EquationState, Expression, Side, Term},
};
use tracing::trace;

/// Applies the move of the block with the given handle from the `from` side to the `to` side.
///
/// If the block is not on the `from` side, the equation is returned unchanged. The solution is
/// always carried over as is.
pub fn apply_move(equation: &EquationState, id: BlockId, from: Side, to: Side) -> EquationState {
    let Some(role) = classify::role_of(equation.side(from), id) else {
        trace!(target: "balance::apply", block = %id, side = %from, "block not found, ignoring move");
        return equation.clone();
    };

    let mut next = equation.clone();
    if from == to {
        trace!(target: "balance::apply", block = %id, side = %from, "reorder");
        reorder(&mut next, id, from);
        return next;
    }

    let target_has_variable = classify::has_variable(equation.side(to));
    match role {
        Role::PairedVariable if target_has_variable => {
            trace!(target: "balance::apply", block = %id, %from, %to, "term migration");
            migrate_term(&mut next, id, from, to);
        },
        Role::Coefficient if !target_has_variable => match coefficient_value(equation, id, from) {
            Some(k) if k != 0.0 => {
                trace!(target: "balance::apply", block = %id, %from, %to, divisor = k, "division");
                divide(&mut next, id, k, from, to);
            },
            _ => {
                trace!(target: "balance::apply", block = %id, %from, %to, "zero coefficient, cross");
                cross(&mut next, id, from, to);
            },
        },
        _ => {
            trace!(target: "balance::apply", block = %id, ?role, %from, %to, "cross");
            cross(&mut next, id, from, to);
        },
    }

    next
}

/// The signed value of the coefficient block with the given handle.
fn coefficient_value(equation: &EquationState, id: BlockId, side: Side) -> Option<f64> {
    equation.side(side).find(id).map(Block::signed_value)
}

/// Moves the block to the end of its own side, sign unchanged.
fn reorder(equation: &mut EquationState, id: BlockId, side: Side) {
    let side = equation.side_mut(side);
    if let Some(block) = side.detach(id) {
        side.push(Term::single(block));
    }
}

/// Moves the block to the end of the other side with its sign flipped.
fn cross(equation: &mut EquationState, id: BlockId, from: Side, to: Side) {
    if let Some(block) = equation.side_mut(from).detach(id) {
        equation.side_mut(to).push(Term::single(block.flipped()));
    }
}

/// Moves the coefficient and variable of a term to the end of the other side, both negated and
/// under fresh handles.
fn migrate_term(equation: &mut EquationState, id: BlockId, from: Side, to: Side) {
    let Some(Term::Scaled { coefficient, variable }) = equation.side_mut(from).remove_term(id) else {
        return;
    };

    let coefficient = coefficient.flipped().with_id(equation.next_id());
    let variable = variable.flipped().with_id(equation.next_id());
    equation.side_mut(to).push(Term::Scaled { coefficient, variable });
}

/// Removes the coefficient `k` from its variable and divides every standalone constant of the
/// target side by it. The whole target side becomes a single constant.
fn divide(equation: &mut EquationState, id: BlockId, k: f64, from: Side, to: Side) {
    equation.side_mut(from).detach(id);

    let quotient = classify::standalone_constant_sum(equation.side(to)) / k;
    let block = Block::constant(equation.next_id(), quotient);
    *equation.side_mut(to) = Expression::new(vec![Term::Constant(block)]);
}
