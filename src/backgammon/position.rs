use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a checker starts a single-die move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Bar,
    Point(u8),
}

/// Where a validated single-die move ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    Point(u8),
    BorneOff,
}

impl Origin {
    pub fn point(&self) -> Option<u8> {
        match self {
            Origin::Point(index) => Some(*index),
            Origin::Bar => None,
        }
    }
}

impl Landing {
    pub fn point(&self) -> Option<u8> {
        match self {
            Landing::Point(index) => Some(*index),
            Landing::BorneOff => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Bar => write!(f, "bar"),
            Origin::Point(index) => write!(f, "{}", index),
        }
    }
}

impl fmt::Display for Landing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Landing::Point(index) => write!(f, "{}", index),
            Landing::BorneOff => write!(f, "off"),
        }
    }
}
