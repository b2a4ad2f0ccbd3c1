use balance_blocks::{
    apply_move,
    check_victory,
    simplify_equation,
    validate_move,
    BlockId,
    EquationState,
    Expression,
    Rejection,
    Side,
    Term,
};
use balance_error::Error;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};
use crate::{
    config::SessionConfig,
    generate::{generate, Level},
};

/// Bookkeeping for the hint that points the player at a block to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintState {
    /// Whether the hint is currently shown.
    pub show_hint: bool,

    /// The block the hint points at.
    pub target_block: Option<BlockId>,

    /// Whether the current exercise is the first one played at this level.
    pub first_exercise_of_level: bool,

    /// The number of moves rejected in a row since the hint was last cleared.
    pub consecutive_errors: u32,
}

impl Default for HintState {
    fn default() -> Self {
        Self {
            show_hint: false,
            target_block: None,
            first_exercise_of_level: true,
            consecutive_errors: 0,
        }
    }
}

/// The most recent rejected move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailedMove {
    pub block: BlockId,
    pub rejection: Rejection,
    pub at: Instant,
}

/// What happened to a move submitted to [`Session::apply_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The block is not on the side it was moved from. Nothing changed.
    Ignored,

    /// The move broke a rule. The equation did not change.
    Rejected(Rejection),

    /// The move was made and the equation simplified.
    Applied {
        /// The resulting equation is solved.
        victory: bool,
    },
}

/// A game in progress: the current equation, level, score and hint.
///
/// The block engine itself is pure; this is where the consequences of a move (scoring, hints)
/// are recorded.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    level: Level,
    score: u32,
    total_score: u32,
    equation: EquationState,
    hint: HintState,
    last_failed_move: Option<FailedMove>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Creates a session with no equation loaded yet.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            level: config.starting_level,
            score: 0,
            total_score: 0,
            equation: EquationState::new(Expression::default(), Expression::default(), 0.0),
            hint: HintState::default(),
            last_failed_move: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Equations solved in the current run.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Equations solved over the lifetime of the session.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn equation(&self) -> &EquationState {
        &self.equation
    }

    pub fn hint(&self) -> &HintState {
        &self.hint
    }

    pub fn last_failed_move(&self) -> Option<&FailedMove> {
        self.last_failed_move.as_ref()
    }

    /// Moves a block from one side to another.
    ///
    /// A legal move replaces the equation with the simplified result and, if that is solved,
    /// scores a point and clears the hint. An illegal move is remembered in
    /// [`Session::last_failed_move`] and counts towards showing a hint.
    pub fn apply_move(&mut self, block: BlockId, from: Side, to: Side) -> MoveOutcome {
        let Some(moved) = self.equation.side(from).find(block) else {
            debug!(target: "balance::session", %block, %from, "block not on side, move ignored");
            return MoveOutcome::Ignored;
        };

        if let Err(rejection) = validate_move(moved, from, to, &self.equation) {
            debug!(target: "balance::session", %block, %from, %to, %rejection, "move rejected");
            self.last_failed_move = Some(FailedMove { block, rejection, at: Instant::now() });
            self.record_error();
            return MoveOutcome::Rejected(rejection);
        }

        self.equation = simplify_equation(&apply_move(&self.equation, block, from, to));
        debug!(target: "balance::session", %block, %from, %to, equation = %self.equation, "move applied");

        let victory = check_victory(&self.equation);
        if victory {
            self.score += 1;
            self.total_score += 1;
            self.clear_hint();
            info!(target: "balance::session", score = self.score, total_score = self.total_score, "equation solved");
        }

        MoveOutcome::Applied { victory }
    }

    /// Counts a rejected move. Once enough errors have been made in a row the hint is shown,
    /// pointing at the [suggested block](Session::suggested_block).
    pub fn record_error(&mut self) {
        self.hint.consecutive_errors += 1;
        let show = self.hint.consecutive_errors >= self.config.hint_error_threshold;

        if show {
            if let Some(target) = self.suggested_block() {
                self.hint.target_block = Some(target);
            }
        }
        self.hint.show_hint |= show;
    }

    /// The block a hint should point at: the first standalone constant on the left side, or else
    /// the first coefficient there.
    pub fn suggested_block(&self) -> Option<BlockId> {
        let terms = self.equation.left.terms();
        let standalone = terms.iter().find_map(|term| match term {
            Term::Constant(block) => Some(block.id),
            _ => None,
        });
        standalone.or_else(|| terms.iter().find_map(|term| match term {
            Term::Scaled { coefficient, .. } => Some(coefficient.id),
            _ => None,
        }))
    }

    /// Hides the hint and resets the error count.
    pub fn clear_hint(&mut self) {
        self.hint.show_hint = false;
        self.hint.target_block = None;
        self.hint.consecutive_errors = 0;
    }

    /// Shows the hint pointing at the given block.
    pub fn show_hint_for_block(&mut self, block: BlockId) {
        self.hint.show_hint = true;
        self.hint.target_block = Some(block);
    }

    pub fn clear_last_failed_move(&mut self) {
        self.last_failed_move = None;
    }

    /// Switches to another level. The next exercise counts as the first of that level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.hint.first_exercise_of_level = true;
    }

    /// Loads a freshly generated equation for the current level and resets the hint.
    ///
    /// The exercise stays marked as the first of its level only when `first_of_level` is set and
    /// it was already marked so.
    pub fn request_new_equation<R: Rng + ?Sized>(&mut self, first_of_level: bool, rng: &mut R) {
        self.equation = generate(self.level, rng);
        self.hint = HintState {
            first_exercise_of_level: first_of_level && self.hint.first_exercise_of_level,
            ..HintState::default()
        };
        debug!(target: "balance::session", level = %self.level, equation = %self.equation, "new equation");
    }

    /// Parses a typed equation and loads it. On error the session is left unchanged.
    pub fn submit(&mut self, input: &str) -> Result<(), Error> {
        let parsed = balance_parser::parse(input)?;
        self.set_equation(parsed.into());
        Ok(())
    }

    /// Replaces the current equation.
    pub fn set_equation(&mut self, equation: EquationState) {
        self.equation = equation;
    }
}
