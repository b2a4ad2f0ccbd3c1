//! Random practice equations with integer solutions.

use balance_blocks::{EquationBuilder, EquationState, Side};
use rand::Rng;
use std::{fmt, ops::RangeInclusive};

/// The difficulty of generated equations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// `ax + b = c`
    #[default]
    One,

    /// `ax = b`, with `a` never `1` or `-1`.
    Two,

    /// `ax + b = cx + d`
    Three,
}

impl Level {
    /// Every level, easiest first.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// The number of the level, from `1` to `3`.
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}

/// A level number outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevel(pub u8);

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "there is no level {}; pick 1, 2 or 3", self.0)
    }
}

impl std::error::Error for InvalidLevel {}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            _ => Err(InvalidLevel(n)),
        }
    }
}

/// Picks a nonzero integer in the range. A drawn zero becomes `1` or `-1` with equal odds.
fn nonzero<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    match rng.gen_range(range) {
        0 if rng.gen_bool(0.5) => 1,
        0 => -1,
        n => n,
    }
}

/// Picks an integer in the range that is neither `0`, `1` nor `-1`.
fn nonzero_except_one<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    loop {
        let n = nonzero(rng, range.clone());
        if n.abs() != 1 {
            return n;
        }
    }
}

/// Appends the term `ax` as a coefficient block and a plain variable block.
fn push_term(builder: &mut EquationBuilder, side: Side, a: i32) {
    builder.constant(side, a as f64);
    builder.x(side);
}

fn level_one<R: Rng + ?Sized>(rng: &mut R) -> EquationState {
    let x = rng.gen_range(-10..=10);
    let a = nonzero(rng, -6..=6);
    let b = rng.gen_range(-12..=12);
    let c = b + a * x;

    let mut eq = EquationBuilder::new();
    push_term(&mut eq, Side::Left, a);
    eq.constant(Side::Left, b as f64);
    eq.constant(Side::Right, c as f64);
    eq.build(x as f64)
}

fn level_two<R: Rng + ?Sized>(rng: &mut R) -> EquationState {
    let a = nonzero_except_one(rng, -8..=8);
    let x = rng.gen_range(-10..=10);
    let b = a * x;

    let mut eq = EquationBuilder::new();
    push_term(&mut eq, Side::Left, a);
    eq.constant(Side::Right, b as f64);
    eq.build(x as f64)
}

fn level_three<R: Rng + ?Sized>(rng: &mut R) -> EquationState {
    let x = rng.gen_range(-8..=8);
    let a = nonzero(rng, -5..=5);
    let mut c = nonzero(rng, -5..=5);
    if a == c {
        c += 1;
    }
    if c == 0 {
        c = 1;
    }
    let b = rng.gen_range(-10..=10);
    let d = b + (a - c) * x;

    let mut eq = EquationBuilder::new();
    push_term(&mut eq, Side::Left, a);
    eq.constant(Side::Left, b as f64);
    push_term(&mut eq, Side::Right, c);
    eq.constant(Side::Right, d as f64);
    eq.build(x as f64)
}

/// Generates an equation of the given level using the given source of randomness.
///
/// The solution is always an integer and is stored in [`EquationState::solution`]. Every
/// coefficient, including `1` and `-1`, is written as its own block in front of the variable.
pub fn generate<R: Rng + ?Sized>(level: Level, rng: &mut R) -> EquationState {
    match level {
        Level::One => level_one(rng),
        Level::Two => level_two(rng),
        Level::Three => level_three(rng),
    }
}

/// Generates an equation of the given level with the thread-local generator.
pub fn generate_equation(level: Level) -> EquationState {
    generate(level, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use balance_blocks::{
        apply_move,
        check_victory,
        eval,
        simplify_equation,
        validate_move,
        Block,
        BlockId,
        BlockKind,
        Term,
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn kinds(blocks: Vec<&Block>) -> Vec<BlockKind> {
        blocks.into_iter().map(|block| block.kind).collect()
    }

    /// Generates many equations of a level from a fixed seed.
    fn sample(level: Level) -> Vec<EquationState> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        (0..500).map(|_| generate(level, &mut rng)).collect()
    }

    #[test]
    fn level_numbers() {
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.number()), Ok(level));
        }
        assert_eq!(Level::try_from(0), Err(InvalidLevel(0)));
        assert_eq!(Level::try_from(4), Err(InvalidLevel(4)));
        assert_eq!(Level::Two.to_string(), "level 2");
    }

    #[test]
    fn level_one_shape() {
        for eq in sample(Level::One) {
            assert_eq!(
                kinds(eq.left.blocks().collect()),
                vec![BlockKind::Constant, BlockKind::Variable, BlockKind::Constant],
            );
            assert_eq!(kinds(eq.right.blocks().collect()), vec![BlockKind::Constant]);

            let a = eval::variable_coefficient(&eq.left);
            assert!(a != 0.0 && a.abs() <= 6.0);
            assert!(eq.solution.abs() <= 10.0);
            assert!(eval::constant_sum(&eq.left).abs() <= 12.0);
        }
    }

    #[test]
    fn level_two_shape() {
        for eq in sample(Level::Two) {
            assert!(matches!(eq.left.terms(), [Term::Scaled { .. }]));
            assert!(matches!(eq.right.terms(), [Term::Constant(_)]));

            let a = eval::variable_coefficient(&eq.left);
            assert!(a.abs() >= 2.0 && a.abs() <= 8.0);
        }
    }

    #[test]
    fn level_three_shape() {
        for eq in sample(Level::Three) {
            for side in [&eq.left, &eq.right] {
                assert!(matches!(side.terms(), [Term::Scaled { .. }, Term::Constant(_)]));
            }

            let a = eval::variable_coefficient(&eq.left);
            let c = eval::variable_coefficient(&eq.right);
            assert_ne!(a, c);
            assert_ne!(c, 0.0);
            assert!(eq.solution.abs() <= 8.0);
        }
    }

    #[test]
    fn solutions_are_integers_that_solve() {
        for level in Level::ALL {
            for eq in sample(level) {
                assert_eq!(eq.solution.fract(), 0.0);
                assert_abs_diff_eq!(eq.residual(eq.solution), 0.0);
            }
        }
    }

    #[test]
    fn handles_are_unique() {
        for eq in sample(Level::Three) {
            let mut ids = eq.blocks().map(|block| block.id).collect::<Vec<_>>();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 6);
        }
    }

    #[test]
    fn same_seed_same_equation() {
        let a = generate(Level::Three, &mut StdRng::seed_from_u64(7));
        let b = generate(Level::Three, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    /// The blocks of both sides as `(kind, signed value, own coefficient)`, ignoring handles.
    fn shape(eq: &EquationState) -> Vec<Vec<(BlockKind, f64, f64)>> {
        [&eq.left, &eq.right]
            .into_iter()
            .map(|side| {
                side.blocks()
                    .map(|block| (block.kind, block.signed_value(), block.own_coefficient()))
                    .collect()
            })
            .collect()
    }

    /// Every legal move that takes a block across the equals sign.
    fn legal_crossings(eq: &EquationState) -> Vec<(BlockId, Side, Side)> {
        eq.blocks()
            .filter_map(|block| {
                let (from, _) = eq.locate(block.id)?;
                let to = from.opposite();
                validate_move(block, from, to, eq).ok().map(|()| (block.id, from, to))
            })
            .collect()
    }

    #[test]
    fn legal_moves_on_generated_equations() {
        let mut rng = StdRng::seed_from_u64(0xb10c);
        for level in Level::ALL {
            for _ in 0..200 {
                let mut eq = generate(level, &mut rng);
                for _ in 0..8 {
                    if check_victory(&eq) {
                        break;
                    }

                    // a collapsed `-x` is written as `x`, after which the solution no longer holds
                    let consistent = eq.residual(eq.solution).abs() < 1e-9;
                    let moves = legal_crossings(&eq);
                    for &(id, from, to) in &moves {
                        let next = apply_move(&eq, id, from, to);
                        assert!(!next.left.is_empty() && !next.right.is_empty(), "{} after moving {}", eq, id);
                        if consistent {
                            assert_abs_diff_eq!(next.residual(next.solution), 0.0, epsilon = 1e-9);
                        }

                        let once = simplify_equation(&next);
                        assert_eq!(shape(&simplify_equation(&once)), shape(&once));
                    }

                    if moves.is_empty() {
                        break;
                    }
                    let (id, from, to) = moves[rng.gen_range(0..moves.len())];
                    eq = simplify_equation(&apply_move(&eq, id, from, to));
                }
            }
        }
    }
}
