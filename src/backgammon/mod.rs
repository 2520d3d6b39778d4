/// Points on the board.
pub const BOARD_SIZE: u8 = 24;
/// Points in each home range.
pub const HOME_SIZE: u8 = 6;
pub const CHECKERS_PER_SIDE: u8 = 15;

mod board;
pub use board::Board;
pub use board::PointStack;

mod player;
pub use player::Color;
pub use player::Player;

mod position;
pub use position::Landing;
pub use position::Origin;

mod outcome;
pub use outcome::GameOutcome;

mod error;
pub use error::EngineError;
pub use error::IllegalMove;

mod validator;
mod executor;

mod halfmove;
pub use halfmove::AppliedMove;
pub use halfmove::HalfMove;

mod dice;
pub use dice::DiceSource;
pub use dice::RandomDice;
pub use dice::RemainingDice;
pub use dice::Roll;
pub use dice::ScriptedDice;

mod rules;
pub use rules::BearOffPolicy;
pub use rules::Rules;

mod game;
pub use game::Game;
pub use game::TurnState;

pub mod simulate;
