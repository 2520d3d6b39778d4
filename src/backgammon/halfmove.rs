use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backgammon::{Color, Landing, Origin};

/// A candidate single-die move: one checker from `origin` by `die` pips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfMove {
    origin: Origin,
    die: u8,
}

impl HalfMove {
    pub fn new(origin: Origin, die: u8) -> Self {
        HalfMove { origin, die }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn die(&self) -> u8 {
        self.die
    }
}

impl fmt::Debug for HalfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.origin, self.die)
    }
}

/// Record of a move the executor has applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub color: Color,
    pub origin: Origin,
    pub die: u8,
    pub landing: Landing,
    /// An opposing blot was sent to the bar.
    pub hit: bool,
}

impl AppliedMove {
    pub fn is_bear_off(&self) -> bool {
        self.landing == Landing::BorneOff
    }

    pub fn is_reentry(&self) -> bool {
        self.origin == Origin::Bar
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {} ({})", self.color, self.origin, self.landing, self.die)?;
        if self.hit {
            write!(f, " hit")?;
        }
        Ok(())
    }
}
