//! Queries about the role each block plays on its side of the equation.
//!
//! None of these functions fail: asking about a block that is not on the given side simply
//! answers `false` / [`None`].

use crate::model::{Block, BlockId, Expression, Term};

/// The role a block plays on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A constant that is not the coefficient of a variable.
    StandaloneConstant,

    /// A constant multiplying the variable right after it.
    Coefficient,

    /// A variable with no coefficient block in front of it.
    BareVariable,

    /// A variable with a coefficient block in front of it.
    PairedVariable,
}

/// Returns the role of the block with the given handle, or [`None`] if it is not on this side.
pub fn role_of(side: &Expression, id: BlockId) -> Option<Role> {
    side.terms().iter().find_map(|term| match term {
        Term::Constant(block) if block.id == id => Some(Role::StandaloneConstant),
        Term::Variable(block) if block.id == id => Some(Role::BareVariable),
        Term::Scaled { coefficient, .. } if coefficient.id == id => Some(Role::Coefficient),
        Term::Scaled { variable, .. } if variable.id == id => Some(Role::PairedVariable),
        _ => None,
    })
}

/// Returns true if the block is a constant acting as the coefficient of a variable.
pub fn is_coefficient(side: &Expression, id: BlockId) -> bool {
    role_of(side, id) == Some(Role::Coefficient)
}

/// Returns true if the block is a variable preceded by its coefficient.
pub fn is_paired_variable(side: &Expression, id: BlockId) -> bool {
    role_of(side, id) == Some(Role::PairedVariable)
}

/// Returns true if the side has a standalone constant with a nonzero value. Zero-valued
/// placeholders do not count.
pub fn has_standalone_constant(side: &Expression) -> bool {
    side.terms()
        .iter()
        .any(|term| matches!(term, Term::Constant(block) if block.value != 0.0))
}

/// Returns true if the side involves the variable at all.
pub fn has_variable(side: &Expression) -> bool {
    side.terms().iter().any(Term::has_variable)
}

/// Returns the coefficient block in front of the given variable, if it has one.
pub fn coefficient_before(side: &Expression, variable_id: BlockId) -> Option<&Block> {
    side.terms().iter().find_map(|term| match term {
        Term::Scaled { coefficient, variable } if variable.id == variable_id => Some(coefficient),
        _ => None,
    })
}

/// The sum of the signed values of every standalone constant on the side.
pub fn standalone_constant_sum(side: &Expression) -> f64 {
    side.terms().iter().filter_map(Term::constant_value).sum()
}
