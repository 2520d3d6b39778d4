use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backgammon::{BOARD_SIZE, HOME_SIZE};

/// Side of a checker. The color alone fixes the movement direction and the
/// home range, so every direction dependent computation goes through here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White (0 -> 23), -1 for Black (23 -> 0).
    pub fn direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Index into per-color counters.
    pub(crate) fn slot(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Inclusive range of the six points nearest this color's exit edge.
    pub fn home_range(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            Color::White => BOARD_SIZE - HOME_SIZE..=BOARD_SIZE - 1,
            Color::Black => 0..=HOME_SIZE - 1,
        }
    }

    pub fn is_home(&self, point: u8) -> bool {
        self.home_range().contains(&point)
    }

    /// Point a checker re-enters on from the bar with `die`.
    /// White enters on the low points, Black on the high points.
    pub fn entry_point(&self, die: u8) -> u8 {
        match self {
            Color::White => die - 1,
            Color::Black => BOARD_SIZE - die,
        }
    }

    /// Steps a checker on `point` still has to travel to leave the board.
    pub fn distance_to_exit(&self, point: u8) -> u8 {
        match self {
            Color::White => BOARD_SIZE - point,
            Color::Black => point + 1,
        }
    }

    /// Raw destination index; may lie outside the board when bearing off.
    pub(crate) fn advance(&self, point: u8, die: u8) -> i8 {
        point as i8 + die as i8 * self.direction()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A seat at the table. Ownership on the board is tracked by [`Color`] only,
/// the name is for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

// The seat is the identity: two players are the same when they play the same color.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Player {}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player { name: name.into(), color }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
