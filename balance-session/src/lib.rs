//! Practice equations and the game session built on top of the block engine.
//!
//! [`generate`] produces random equations for each [`Level`]. A [`Session`] holds the equation
//! being solved and keeps score: moves go through [`Session::apply_move`], which validates,
//! applies and simplifies them, then awards a point when the equation is solved.

pub mod config;
pub mod generate;
pub mod session;

pub use config::SessionConfig;
pub use generate::{generate, generate_equation, InvalidLevel, Level};
pub use session::{FailedMove, HintState, MoveOutcome, Session};
