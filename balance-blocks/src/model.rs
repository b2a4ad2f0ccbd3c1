//! The data model of an equation made of movable blocks.
//!
//! An equation has two sides, each an ordered list of [`Term`]s. A term is either a standalone
//! constant, a bare variable, or a coefficient paired with a variable. Collaborators that produce
//! equations (the parser, the practice generator) usually think in flat block sequences, where a
//! constant immediately followed by a variable is that variable's coefficient;
//! [`Expression::from_blocks`] groups such sequences into terms once, so the rest of the engine
//! never has to infer pairing from neighbouring positions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An opaque, stable handle identifying a single block within an [`EquationState`].
///
/// Handles are only ever created by an [`IdAllocator`], so two blocks of the same equation never
/// share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockId(u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = std::num::ParseIntError;

    /// Parses the `Display` form of a handle (`#3`), or just the number (`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#').unwrap_or(s).parse().map(Self)
    }
}

/// Hands out fresh [`BlockId`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator whose first handle is `#0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that has never been returned by this allocator.
    ///
    /// Once `#4294967295` has been handed out or reserved, it is returned again instead of
    /// overflowing.
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Makes sure `id` (and every handle before it) is never handed out again.
    fn reserve(&mut self, id: BlockId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }
}

/// The sign of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// The sign of the given number. Zero (including `-0.0`) is positive.
    pub fn of(n: f64) -> Self {
        if n >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Returns the opposite sign.
    pub fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Returns `1.0` or `-1.0`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// What a block stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockKind {
    /// The unknown, `x`.
    Variable,

    /// A number.
    Constant,
}

/// An atomic piece of one side of an equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// The handle of this block.
    pub id: BlockId,

    /// Whether this block is a constant or the variable.
    pub kind: BlockKind,

    /// The magnitude of the block, never negative. Always `1` for variables, whose magnitude
    /// lives in [`Block::coefficient`] instead.
    pub value: f64,

    /// The sign applied to [`Block::value`] (or [`Block::coefficient`] for variables).
    pub sign: Sign,

    /// The multiplier of a variable that has no coefficient block in front of it. Treated as `1`
    /// when absent. Unused for constants.
    pub coefficient: Option<f64>,
}

impl Block {
    /// Creates a constant block holding the given signed number.
    pub fn constant(id: BlockId, signed_value: f64) -> Self {
        Self {
            id,
            kind: BlockKind::Constant,
            value: signed_value.abs(),
            sign: Sign::of(signed_value),
            coefficient: None,
        }
    }

    /// Creates a variable block with the given coefficient and sign.
    pub fn variable(id: BlockId, coefficient: f64, sign: Sign) -> Self {
        Self {
            id,
            kind: BlockKind::Variable,
            value: 1.0,
            sign,
            coefficient: Some(coefficient),
        }
    }

    pub fn is_constant(&self) -> bool {
        self.kind == BlockKind::Constant
    }

    pub fn is_variable(&self) -> bool {
        self.kind == BlockKind::Variable
    }

    /// `sign * value`.
    pub fn signed_value(&self) -> f64 {
        self.sign.as_f64() * self.value
    }

    /// The coefficient of a variable block standing on its own: `sign * coefficient`, with a
    /// missing coefficient counting as `1`.
    pub fn own_coefficient(&self) -> f64 {
        self.sign.as_f64() * self.coefficient.unwrap_or(1.0)
    }

    /// Returns a copy of this block with the opposite sign.
    pub fn flipped(&self) -> Self {
        Self { sign: self.sign.flip(), ..self.clone() }
    }

    /// Returns a copy of this block with a different handle.
    pub fn with_id(&self, id: BlockId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// A single semantic unit of one side of an equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A constant that does not multiply the variable.
    Constant(Block),

    /// A variable without a coefficient block; its multiplier is [`Block::own_coefficient`].
    Variable(Block),

    /// A coefficient block directly in front of a variable block. The signed value of the
    /// coefficient is the multiplier; the variable's own sign and coefficient do not count.
    Scaled {
        coefficient: Block,
        variable: Block,
    },
}

impl Term {
    /// Wraps a lone block in the matching single-block term.
    pub fn single(block: Block) -> Self {
        match block.kind {
            BlockKind::Constant => Self::Constant(block),
            BlockKind::Variable => Self::Variable(block),
        }
    }

    /// The blocks making up this term, in display order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        let (first, second) = match self {
            Self::Constant(block) | Self::Variable(block) => (block, None),
            Self::Scaled { coefficient, variable } => (coefficient, Some(variable)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn block_count(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable(_) => 1,
            Self::Scaled { .. } => 2,
        }
    }

    /// Returns true if the block with the given handle is part of this term.
    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks().any(|block| block.id == id)
    }

    /// Returns true if this term involves the variable.
    pub fn has_variable(&self) -> bool {
        !matches!(self, Self::Constant(_))
    }

    /// The signed multiplier of the variable, or [`None`] for standalone constants.
    pub fn effective_coefficient(&self) -> Option<f64> {
        match self {
            Self::Constant(_) => None,
            Self::Variable(variable) => Some(variable.own_coefficient()),
            Self::Scaled { coefficient, .. } => Some(coefficient.signed_value()),
        }
    }

    /// The signed value of a standalone constant, or [`None`] for variable terms.
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            Self::Constant(block) => Some(block.signed_value()),
            _ => None,
        }
    }
}

/// Selects one side of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(format!("unknown side `{}`, expected `left` or `right`", s)),
        }
    }
}

/// One side of an equation: an ordered list of terms.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Creates a side from already-grouped terms.
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Groups a flat block sequence into terms. A constant immediately followed by a variable
    /// becomes that variable's coefficient; every other block stands on its own.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut blocks = blocks.into_iter().peekable();
        let mut terms = Vec::new();

        while let Some(block) = blocks.next() {
            let pairs_with_next = block.is_constant()
                && blocks.peek().is_some_and(Block::is_variable);

            match blocks.next_if(|_| pairs_with_next) {
                Some(variable) => terms.push(Term::Scaled { coefficient: block, variable }),
                None => terms.push(Term::single(block)),
            }
        }

        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The blocks of this side, in display order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.terms.iter().flat_map(|term| term.blocks())
    }

    /// The number of blocks on this side (a paired term counts twice).
    pub fn block_count(&self) -> usize {
        self.terms.iter().map(Term::block_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Finds the block with the given handle on this side.
    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.blocks().find(|block| block.id == id)
    }

    /// The index of the term containing the given block.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.terms.iter().position(|term| term.contains(id))
    }

    pub(crate) fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Removes the whole term containing the given block.
    pub(crate) fn remove_term(&mut self, id: BlockId) -> Option<Term> {
        let index = self.position(id)?;
        Some(self.terms.remove(index))
    }

    /// Takes a single block out of this side. If the block belonged to a paired term, its
    /// partner stays in place as a term of its own.
    pub(crate) fn detach(&mut self, id: BlockId) -> Option<Block> {
        let index = self.position(id)?;
        match self.terms.remove(index) {
            Term::Constant(block) | Term::Variable(block) => Some(block),
            Term::Scaled { coefficient, variable } => {
                let (taken, partner) = if coefficient.id == id {
                    (coefficient, variable)
                } else {
                    (variable, coefficient)
                };
                self.terms.insert(index, Term::single(partner));
                Some(taken)
            },
        }
    }
}

/// A complete equation, `left = right`.
///
/// States are values: every engine operation takes a state by reference and returns a new one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquationState {
    /// The left side of the equation.
    pub left: Expression,

    /// The right side of the equation.
    pub right: Expression,

    /// The value of `x` solving the equation as it was first created. Moves never change it.
    pub solution: f64,

    /// Source of fresh handles for blocks synthesized by moves and simplification.
    ids: IdAllocator,
}

impl EquationState {
    /// Creates an equation from its two sides.
    pub fn new(left: Expression, right: Expression, solution: f64) -> Self {
        let mut ids = IdAllocator::new();
        for block in left.blocks().chain(right.blocks()) {
            ids.reserve(block.id);
        }
        Self { left, right, solution, ids }
    }

    /// Creates an equation from two flat block sequences, see [`Expression::from_blocks`].
    pub fn from_blocks(
        left: impl IntoIterator<Item = Block>,
        right: impl IntoIterator<Item = Block>,
        solution: f64,
    ) -> Self {
        Self::new(Expression::from_blocks(left), Expression::from_blocks(right), solution)
    }

    /// Reassembles a state keeping an existing allocator.
    pub(crate) fn with_ids(left: Expression, right: Expression, solution: f64, ids: IdAllocator) -> Self {
        Self { left, right, solution, ids }
    }

    pub fn side(&self, side: Side) -> &Expression {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut Expression {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    pub(crate) fn next_id(&mut self) -> BlockId {
        self.ids.next_id()
    }

    /// Finds a block anywhere in the equation, along with the side it is on.
    pub fn locate(&self, id: BlockId) -> Option<(Side, &Block)> {
        self.left.find(id).map(|block| (Side::Left, block))
            .or_else(|| self.right.find(id).map(|block| (Side::Right, block)))
    }

    /// Every block of the equation, left side first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.left.blocks().chain(self.right.blocks())
    }
}

/// Builds equations block by block, handing out handles as it goes. Blocks on each side are
/// grouped into terms the same way as [`Expression::from_blocks`].
#[derive(Debug, Default)]
pub struct EquationBuilder {
    ids: IdAllocator,
    left: Vec<Block>,
    right: Vec<Block>,
}

impl EquationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, side: Side, block: Block) -> BlockId {
        let id = block.id;
        match side {
            Side::Left => self.left.push(block),
            Side::Right => self.right.push(block),
        }
        id
    }

    /// Appends a constant holding the given signed value.
    pub fn constant(&mut self, side: Side, signed_value: f64) -> BlockId {
        let block = Block::constant(self.ids.next_id(), signed_value);
        self.push(side, block)
    }

    /// Appends a variable with the given coefficient and sign.
    pub fn variable(&mut self, side: Side, coefficient: f64, sign: Sign) -> BlockId {
        let block = Block::variable(self.ids.next_id(), coefficient, sign);
        self.push(side, block)
    }

    /// Appends the plain variable `x` (coefficient `1`, positive).
    pub fn x(&mut self, side: Side) -> BlockId {
        self.variable(side, 1.0, Sign::Positive)
    }

    pub fn build(self, solution: f64) -> EquationState {
        EquationState::with_ids(
            Expression::from_blocks(self.left),
            Expression::from_blocks(self.right),
            solution,
            self.ids,
        )
    }
}
