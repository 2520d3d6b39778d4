use crate::backgammon::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    /// The color has borne off all fifteen checkers.
    Win(Color),
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Win(color) => Some(*color),
            GameOutcome::Ongoing => None,
        }
    }
}
