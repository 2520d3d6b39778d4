use std::fmt;

use crate::backgammon::{CHECKERS_PER_SIDE, Color};

/// Why a single-die move was refused. Always recoverable: the board and the
/// remaining dice are untouched and the player may try another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    /// The origin point holds no checker.
    EmptyOrigin,
    /// The origin point is held by the opponent.
    WrongOwner,
    /// The destination point holds two or more opposing checkers.
    Blocked(u8),
    /// The die does not carry the checker to a legal destination, e.g. an
    /// overshoot while a checker remains farther from home.
    DieMismatch,
    /// A checker on the bar has to re-enter first.
    BarPending,
    /// Re-entry requested but the bar holds none of the mover's checkers.
    EmptyBar,
    /// Bear-off attempted while some checker is outside the home range.
    NotHomeReady,
    /// A larger remaining die bears off the same checker and must be used first.
    LargerDieRequired,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::EmptyOrigin => write!(f, "no checker on the origin point"),
            IllegalMove::WrongOwner => write!(f, "origin point belongs to the opponent"),
            IllegalMove::Blocked(point) => write!(f, "point {} is blocked", point),
            IllegalMove::DieMismatch => write!(f, "die value does not give a legal move"),
            IllegalMove::BarPending => write!(f, "checkers on the bar must re-enter first"),
            IllegalMove::EmptyBar => write!(f, "no checker on the bar"),
            IllegalMove::NotHomeReady => write!(f, "not all checkers are in the home board"),
            IllegalMove::LargerDieRequired => write!(f, "the larger die must be used to bear off"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineError {
    IllegalMove(IllegalMove),
    /// A point index outside 0..=23 reached a query or placement. Caller bug,
    /// never corrected silently.
    PointOutOfRange(u8),
    /// A point already holds 15 checkers.
    StackFull(u8),
    /// Setting up the position would give this color more than 15 checkers.
    CheckerLimit(Color),
    /// The die value is not among the remaining moves of this turn.
    DieNotRolled(u8),
    /// `roll` was called while the turn still has dice or is finished.
    NotAwaitingRoll,
    /// Moves are requested before rolling, or the turn was already completed.
    NoRollPending,
    /// The active player still has legal moves to make.
    TurnInProgress,
    GameOver,
}

impl From<IllegalMove> for EngineError {
    fn from(value: IllegalMove) -> Self {
        EngineError::IllegalMove(value)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalMove(reason) => write!(f, "illegal move: {}", reason),
            EngineError::PointOutOfRange(index) => {
                write!(f, "point index {} is outside 0..=23", index)
            }
            EngineError::StackFull(index) => write!(f, "point {} is full", index),
            EngineError::CheckerLimit(color) => {
                write!(f, "{} would own more than {} checkers", color, CHECKERS_PER_SIDE)
            }
            EngineError::DieNotRolled(die) => write!(f, "die value {} is not available", die),
            EngineError::NotAwaitingRoll => {
                write!(f, "dice can only be rolled at the start of a turn")
            }
            EngineError::NoRollPending => write!(f, "no rolled dice to move with"),
            EngineError::TurnInProgress => write!(f, "the current player still has legal moves"),
            EngineError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for IllegalMove {}

impl std::error::Error for EngineError {}

impl EngineError {
    /// The refusal reason when this is a plain illegal move.
    pub fn illegal_move(&self) -> Option<IllegalMove> {
        match self {
            EngineError::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_reason() {
        let err: EngineError = IllegalMove::Blocked(7).into();
        assert_eq!(err.illegal_move(), Some(IllegalMove::Blocked(7)));
        assert_eq!(err.to_string(), "illegal move: point 7 is blocked");
        assert_eq!(EngineError::CheckerLimit(Color::Black).illegal_move(), None);
        assert_eq!(EngineError::GameOver.illegal_move(), None);
    }
}
