//! Block-based engine for solving linear equations in one variable by moving terms across the
//! equals sign.
//!
//! An equation is held as an [`EquationState`]: two [`Expression`]s, each an ordered list of
//! [`Term`]s built from [`Block`]s. A move names a block by its [`BlockId`] and the sides it moves
//! between. Callers first check it with [`validate_move`], then compute the resulting equation
//! with [`apply_move`], tidy it with [`simplify_equation`] and test it with [`check_victory`].
//!
//! ```
//! use balance_blocks::{apply_move, check_victory, validate_move, EquationBuilder, Side};
//!
//! // 2x = 6
//! let mut eq = EquationBuilder::new();
//! let two = eq.constant(Side::Left, 2.0);
//! eq.x(Side::Left);
//! eq.constant(Side::Right, 6.0);
//! let eq = eq.build(3.0);
//!
//! let (_, block) = eq.locate(two).unwrap();
//! assert!(validate_move(block, Side::Left, Side::Right, &eq).is_ok());
//!
//! let eq = apply_move(&eq, two, Side::Left, Side::Right);
//! assert_eq!(eq.to_string(), "x = 3");
//! assert!(check_victory(&eq));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the model types.

pub mod apply;
pub mod classify;
pub mod eval;
pub mod label;
pub mod model;
pub mod simplify;
pub mod validate;
pub mod victory;

pub use apply::apply_move;
pub use classify::Role;
pub use eval::LineCoefficients;
pub use model::{
    Block,
    BlockId,
    BlockKind,
    EquationBuilder,
    EquationState,
    Expression,
    IdAllocator,
    Side,
    Sign,
    Term,
};
pub use simplify::simplify_equation;
pub use validate::{can_coefficient_be_moved, validate_move, MoveCheck, Rejection};
pub use victory::check_victory;
