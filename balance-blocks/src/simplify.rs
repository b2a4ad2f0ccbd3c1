//! Collects like terms on each side of an equation.
//!
//! Every side collapses to at most one variable term followed by at most one constant. A side
//! whose sums are both zero becomes a single `0` constant, so no side is ever left empty.
//!
//! A collapsed variable term of magnitude `1` is written as a bare, positive variable with no
//! coefficient block, **whatever the sign of the sum**: `-x` comes out as `x`. The victory check
//! compensates for this by accepting `-x = 0`.

use crate::{
    eval,
    model::{Block, EquationState, Expression, IdAllocator, Sign, Term},
};

/// Simplifies both sides of the equation. Blocks of the result get fresh handles.
pub fn simplify_equation(equation: &EquationState) -> EquationState {
    let mut ids = equation.ids().clone();
    let left = collapse(&equation.left, &mut ids);
    let right = collapse(&equation.right, &mut ids);
    EquationState::with_ids(left, right, equation.solution, ids)
}

/// Collapses a single side.
fn collapse(side: &Expression, ids: &mut IdAllocator) -> Expression {
    let variable_sum = eval::variable_coefficient(side);
    let constant_sum = eval::constant_sum(side);

    let mut terms = Vec::with_capacity(2);
    if variable_sum != 0.0 {
        if variable_sum.abs() != 1.0 {
            let coefficient = Block::constant(ids.next_id(), variable_sum);
            let variable = Block::variable(ids.next_id(), 1.0, Sign::Positive);
            terms.push(Term::Scaled { coefficient, variable });
        } else {
            terms.push(Term::Variable(Block::variable(ids.next_id(), 1.0, Sign::Positive)));
        }
    }

    if constant_sum != 0.0 {
        terms.push(Term::Constant(Block::constant(ids.next_id(), constant_sum)));
    }

    if terms.is_empty() {
        terms.push(Term::Constant(Block::constant(ids.next_id(), 0.0)));
    }

    Expression::new(terms)
}
