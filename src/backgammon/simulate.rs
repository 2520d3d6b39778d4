//! Random self-play. Every move is drawn uniformly from the legal ones and
//! the board invariants are checked after each of them, which makes this the
//! soak test for the engine.

use std::fmt;

use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};

use crate::backgammon::{
    Board, CHECKERS_PER_SIDE, Color, EngineError, Game, RandomDice, Rules, TurnState,
};

/// Games still running after this many turns are abandoned.
pub const MAX_TURNS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Points, bar and borne off do not add up to fifteen.
    CheckerCount { color: Color, count: u16 },
    /// A point holds checkers of both colors.
    MixedPoint(u8),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::CheckerCount { color, count } => {
                write!(f, "{} has {} checkers instead of {}", color, count, CHECKERS_PER_SIDE)
            }
            InvariantViolation::MixedPoint(point) => write!(f, "point {} holds both colors", point),
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    Engine(EngineError),
    Invariant(InvariantViolation),
}

impl From<EngineError> for SimulationError {
    fn from(value: EngineError) -> Self {
        SimulationError::Engine(value)
    }
}

impl From<InvariantViolation> for SimulationError {
    fn from(value: InvariantViolation) -> Self {
        SimulationError::Invariant(value)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Engine(err) => write!(f, "engine error: {}", err),
            SimulationError::Invariant(violation) => write!(f, "invariant violated: {}", violation),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Checks conservation of checkers and single-color points.
pub fn check_invariants(board: &Board) -> Result<(), InvariantViolation> {
    for color in Color::ALL {
        let count = board.checker_count(color);
        if count != u16::from(CHECKERS_PER_SIDE) {
            return Err(InvariantViolation::CheckerCount { color, count });
        }
    }
    for (index, stack) in board.points() {
        if stack.windows(2).any(|pair| pair[0] != pair[1]) {
            return Err(InvariantViolation::MixedPoint(index));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    /// `None` when the game hit [`MAX_TURNS`].
    pub winner: Option<Color>,
    pub turns: u32,
    pub moves: u32,
    pub hits: u32,
    /// Turns that ended with at least one die unplayed.
    pub forfeited_dice: u32,
}

/// Plays one game to the end with random legal moves. The same seed and
/// rules always produce the same game.
pub fn play_random_game(seed: u64, rules: Rules) -> Result<GameSummary, SimulationError> {
    let mut game = Game::with_dice("White", "Black", RandomDice::seeded(seed)).with_rules(rules);
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);
    let mut summary = GameSummary::default();

    while summary.turns < MAX_TURNS {
        summary.turns += 1;
        game.roll()?;

        while game.state() == TurnState::MovesPending {
            let Some(mv) = game.legal_moves().into_iter().choose(&mut rng) else {
                break;
            };
            let applied = game.make_move(mv.origin(), mv.die())?;
            summary.moves += 1;
            summary.hits += applied.hit as u32;
            check_invariants(game.board())?;
        }

        if game.state() == TurnState::GameOver {
            summary.winner = game.check_winner().map(|player| player.color());
            break;
        }
        if !game.remaining_moves().is_empty() {
            summary.forfeited_dice += 1;
        }
        game.switch_player()?;
    }
    Ok(summary)
}
