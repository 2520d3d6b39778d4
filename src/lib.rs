//! Rules engine for backgammon: move validation and execution under dice
//! constraints, bar re-entry, hits, bear-off and win detection.
//!
//! ```
//! use backgammon_rules::backgammon::{Color, Game, Origin, ScriptedDice};
//!
//! let dice = ScriptedDice::new(&[(3, 1)]).unwrap();
//! let mut game = Game::with_dice("Ana", "Bruno", dice);
//! game.roll().unwrap();
//! game.make_move(Origin::Point(16), 3).unwrap();
//! game.make_move(Origin::Point(18), 1).unwrap();
//! assert_eq!(game.board().count_on(19), Ok(2));
//! assert_eq!(game.board().checker_count(Color::White), 15);
//! ```

pub mod backgammon;
pub mod misc;
