use std::fmt;

use crate::{
    backgammon::{BOARD_SIZE, CHECKERS_PER_SIDE, Color, EngineError, GameOutcome, IllegalMove},
    misc::TinyVec,
};

/// Checkers stacked on one point. Every entry is the color tag of a checker,
/// so a stack never needs to reference a player.
pub type PointStack = TinyVec<Color, { CHECKERS_PER_SIDE as usize }>;

/// Standard opening layout as `(point, color, checkers)`.
const OPENING_LAYOUT: [(u8, Color, u8); 8] = [
    (0, Color::White, 2),
    (11, Color::White, 5),
    (16, Color::White, 3),
    (18, Color::White, 5),
    (23, Color::Black, 2),
    (12, Color::Black, 5),
    (7, Color::Black, 3),
    (5, Color::Black, 5),
];

/// The point track: 24 stacks plus per-color bar and borne-off counters.
/// This is the only mutable state of a game. Index 0 is White's starting
/// edge, index 23 Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [PointStack; BOARD_SIZE as usize],
    bar: [u8; 2],
    borne_off: [u8; 2],
}

impl Board {
    /// Creates a new board with the default starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup();
        board
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board {
            points: [PointStack::new(); BOARD_SIZE as usize],
            bar: [0; 2],
            borne_off: [0; 2],
        }
    }

    /// Clears every counter and places the 30 checkers of the opening layout.
    pub fn setup(&mut self) {
        *self = Board::empty();
        for (point, color, count) in OPENING_LAYOUT {
            for _ in 0..count {
                // The layout fits by construction.
                let _ = self.points[point as usize].try_push(color);
            }
        }
    }

    fn check_index(index: u8) -> Result<usize, EngineError> {
        if index < BOARD_SIZE {
            Ok(index as usize)
        } else {
            Err(EngineError::PointOutOfRange(index))
        }
    }

    /// Checkers on `index`, bottom of the stack first.
    pub fn point_contents(&self, index: u8) -> Result<&[Color], EngineError> {
        Ok(&self.points[Self::check_index(index)?])
    }

    /// All 24 points in index order.
    pub fn points(&self) -> impl Iterator<Item = (u8, &[Color])> {
        self.points.iter().enumerate().map(|(i, stack)| (i as u8, &**stack))
    }

    /// Color holding `index`, `None` when the point is empty.
    pub fn owner(&self, index: u8) -> Result<Option<Color>, EngineError> {
        Ok(self.points[Self::check_index(index)?].last().copied())
    }

    pub fn count_on(&self, index: u8) -> Result<u8, EngineError> {
        Ok(self.points[Self::check_index(index)?].len())
    }

    /// Unchecked form of [`Self::owner`]; out of range reads as empty.
    pub(crate) fn owner_at(&self, index: u8) -> Option<Color> {
        self.points.get(index as usize)?.last().copied()
    }

    pub(crate) fn count_at(&self, index: u8) -> u8 {
        self.points.get(index as usize).map_or(0, |stack| stack.len())
    }

    pub fn bar_count(&self, color: Color) -> u8 {
        self.bar[color.slot()]
    }

    pub fn borne_off_count(&self, color: Color) -> u8 {
        self.borne_off[color.slot()]
    }

    /// Checkers of `color` standing on points.
    pub fn on_board(&self, color: Color) -> u16 {
        self.points
            .iter()
            .filter(|stack| stack.last() == Some(&color))
            .map(|stack| u16::from(stack.len()))
            .sum()
    }

    /// Points plus bar plus borne off. 15 for every reachable position.
    pub fn checker_count(&self, color: Color) -> u16 {
        self.on_board(color)
            + u16::from(self.bar_count(color))
            + u16::from(self.borne_off_count(color))
    }

    /// Total pips `color` still has to travel to bear everything off.
    pub fn pip_count(&self, color: Color) -> u32 {
        let on_points: u32 = self
            .points()
            .filter(|(_, stack)| stack.last() == Some(&color))
            .map(|(i, stack)| color.distance_to_exit(i) as u32 * stack.len() as u32)
            .sum();
        on_points + self.bar_count(color) as u32 * (BOARD_SIZE as u32 + 1)
    }

    /// Two or more opposing checkers make a point unusable for `color`.
    pub fn is_blocked_for(&self, color: Color, index: u8) -> bool {
        self.owner_at(index) == Some(color.opposite()) && self.count_at(index) >= 2
    }

    /// True when every checker of `color` is home or already borne off.
    pub fn can_bear_off(&self, color: Color) -> bool {
        self.bar_count(color) == 0
            && self
                .points()
                .all(|(i, stack)| stack.last() != Some(&color) || color.is_home(i))
    }

    /// Whether some checker of `color` stands strictly farther from home than `index`.
    pub fn has_checker_behind(&self, color: Color, index: u8) -> bool {
        let behind = match color {
            Color::White => 0..index,
            Color::Black => index + 1..BOARD_SIZE,
        };
        behind.into_iter().any(|i| self.owner_at(i) == Some(color))
    }

    pub fn outcome(&self) -> GameOutcome {
        Color::ALL
            .into_iter()
            .find(|&color| self.borne_off_count(color) == CHECKERS_PER_SIDE)
            .map_or(GameOutcome::Ongoing, GameOutcome::Win)
    }

    /// Fails when `color` would own more than fifteen checkers once its
    /// count of `replaced` is swapped for `count`.
    fn check_limit(&self, color: Color, replaced: u8, count: u8) -> Result<(), EngineError> {
        let total = self.checker_count(color) - u16::from(replaced) + u16::from(count);
        if total > u16::from(CHECKERS_PER_SIDE) {
            return Err(EngineError::CheckerLimit(color));
        }
        Ok(())
    }

    /// Puts a checker of `color` on `index`. Meant for building positions;
    /// game play mutates the board through moves only.
    pub fn place_checker(&mut self, index: u8, color: Color) -> Result<(), EngineError> {
        let slot = Self::check_index(index)?;
        if self.owner_at(index) == Some(color.opposite()) {
            return Err(IllegalMove::WrongOwner.into());
        }
        self.check_limit(color, 0, 1)?;
        self.points[slot]
            .try_push(color)
            .map_err(|_| EngineError::StackFull(index))
    }

    pub fn set_bar(&mut self, color: Color, count: u8) -> Result<(), EngineError> {
        self.check_limit(color, self.bar_count(color), count)?;
        self.bar[color.slot()] = count;
        Ok(())
    }

    pub fn set_borne_off(&mut self, color: Color, count: u8) -> Result<(), EngineError> {
        self.check_limit(color, self.borne_off_count(color), count)?;
        self.borne_off[color.slot()] = count;
        Ok(())
    }

    pub(crate) fn pop_checker(&mut self, index: u8) -> Option<Color> {
        self.points.get_mut(index as usize)?.pop()
    }

    pub(crate) fn push_checker(&mut self, index: u8, color: Color) -> Result<(), EngineError> {
        self.points[Self::check_index(index)?]
            .try_push(color)
            .map_err(|_| EngineError::StackFull(index))
    }

    pub(crate) fn bar_mut(&mut self, color: Color) -> &mut u8 {
        &mut self.bar[color.slot()]
    }

    pub(crate) fn borne_off_mut(&mut self, color: Color) -> &mut u8 {
        &mut self.borne_off[color.slot()]
    }

    fn signed_count(&self, index: u8) -> i8 {
        match self.owner_at(index) {
            Some(Color::White) => self.count_at(index) as i8,
            Some(Color::Black) => -(self.count_at(index) as i8),
            None => 0,
        }
    }

    /// Text diagram seen from White's side. White counts are positive,
    /// Black counts negative; point labels are 1-based.
    pub fn to_fancy_string(&self) -> String {
        let c = |i: u8| self.signed_count(i);
        format!(
"12  11  10   9   8   7  | W |   6   5   4   3   2   1    off W: {:2}
{:3} {:3} {:3} {:3} {:3} {:3}  | {:1} |  {:3} {:3} {:3} {:3} {:3} {:3}
==================================================================
{:3} {:3} {:3} {:3} {:3} {:3}  | {:1} |  {:3} {:3} {:3} {:3} {:3} {:3}
13  14  15  16  17  18  | B |  19  20  21  22  23  24    off B: {:2}",
            self.borne_off_count(Color::White),
            c(11), c(10), c(9), c(8), c(7), c(6),
            self.bar_count(Color::White),
            c(5), c(4), c(3), c(2), c(1), c(0),
            c(12), c(13), c(14), c(15), c(16), c(17),
            self.bar_count(Color::Black),
            c(18), c(19), c(20), c(21), c(22), c(23),
            self.borne_off_count(Color::Black),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fancy_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgammon::Origin;

    #[test]
    fn test_opening_layout() {
        let board = Board::new();
        assert_eq!(board.point_contents(0).unwrap(), &[Color::White; 2]);
        assert_eq!(board.point_contents(23).unwrap(), &[Color::Black; 2]);
        assert_eq!(board.point_contents(5).unwrap(), &[Color::Black; 5]);
        assert_eq!(board.point_contents(18).unwrap(), &[Color::White; 5]);
        let total: usize = board.points().map(|(_, stack)| stack.len()).sum();
        assert_eq!(total, 30);
        for color in Color::ALL {
            assert_eq!(board.on_board(color), 15);
            assert_eq!(board.bar_count(color), 0);
            assert_eq!(board.borne_off_count(color), 0);
            assert_eq!(board.pip_count(color), 167);
        }
    }

    #[test]
    fn test_layout_is_mirrored() {
        let board = Board::new();
        for i in 0..24 {
            assert_eq!(board.count_on(i), board.count_on(23 - i));
            assert_eq!(board.owner(i).unwrap().map(|c| c.opposite()), board.owner(23 - i).unwrap());
        }
    }

    #[test]
    fn test_out_of_range_queries_fail() {
        let mut board = Board::new();
        assert_eq!(board.point_contents(24), Err(EngineError::PointOutOfRange(24)));
        assert_eq!(board.place_checker(200, Color::White), Err(EngineError::PointOutOfRange(200)));
        assert_eq!(board.owner(24), Err(EngineError::PointOutOfRange(24)));
        assert_eq!(board.count_on(99), Err(EngineError::PointOutOfRange(99)));
        assert_eq!(board.owner(23), Ok(Some(Color::Black)));
        assert_eq!(board.count_on(23), Ok(2));
    }

    #[test]
    fn test_place_checker_refuses_mixed_point() {
        let mut board = Board::empty();
        board.place_checker(3, Color::Black).unwrap();
        assert_eq!(
            board.place_checker(3, Color::White),
            Err(EngineError::IllegalMove(IllegalMove::WrongOwner))
        );
        for _ in 0..14 {
            board.place_checker(3, Color::Black).unwrap();
        }
        assert_eq!(
            board.place_checker(3, Color::Black),
            Err(EngineError::CheckerLimit(Color::Black))
        );
    }

    #[test]
    fn test_setup_resets_everything() {
        let mut board = Board::empty();
        board.place_checker(9, Color::White).unwrap();
        board.set_bar(Color::Black, 3).unwrap();
        board.set_borne_off(Color::White, 7).unwrap();
        board.setup();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_can_bear_off() {
        let mut board = Board::empty();
        for _ in 0..14 {
            board.place_checker(20, Color::White).unwrap();
        }
        assert!(board.can_bear_off(Color::White));
        board.set_bar(Color::White, 1).unwrap();
        assert!(!board.can_bear_off(Color::White));
        board.set_bar(Color::White, 0).unwrap();
        board.place_checker(15, Color::White).unwrap();
        assert!(!board.can_bear_off(Color::White));
    }

    #[test]
    fn test_checker_behind() {
        let mut board = Board::empty();
        board.place_checker(19, Color::White).unwrap();
        board.place_checker(22, Color::White).unwrap();
        board.place_checker(4, Color::Black).unwrap();
        assert!(board.has_checker_behind(Color::White, 22));
        assert!(!board.has_checker_behind(Color::White, 19));
        assert!(!board.has_checker_behind(Color::Black, 4));
        assert!(board.has_checker_behind(Color::Black, 1));
    }

    #[test]
    fn test_outcome() {
        let mut board = Board::empty();
        assert_eq!(board.outcome(), GameOutcome::Ongoing);
        board.set_borne_off(Color::Black, 15).unwrap();
        assert_eq!(board.outcome(), GameOutcome::Win(Color::Black));
    }

    #[test]
    fn test_fifteen_checker_limit() {
        let mut board = Board::empty();
        for point in 0..15 {
            board.place_checker(point, Color::White).unwrap();
        }
        assert_eq!(
            board.place_checker(20, Color::White),
            Err(EngineError::CheckerLimit(Color::White))
        );
        assert_eq!(board.set_bar(Color::White, 1), Err(EngineError::CheckerLimit(Color::White)));
        assert_eq!(
            board.set_borne_off(Color::White, 1),
            Err(EngineError::CheckerLimit(Color::White))
        );
        assert_eq!(board.checker_count(Color::White), 15);

        assert_eq!(board.set_bar(Color::Black, 255), Err(EngineError::CheckerLimit(Color::Black)));
        board.set_bar(Color::Black, 10).unwrap();
        // Replacing a counter only counts the new value.
        board.set_bar(Color::Black, 15).unwrap();
        assert_eq!(
            board.set_borne_off(Color::Black, 1),
            Err(EngineError::CheckerLimit(Color::Black))
        );
        assert_eq!(board.checker_count(Color::Black), 15);
    }

    #[test]
    fn test_hit_into_full_bar_cannot_overflow() {
        let mut board = Board::empty();
        board.place_checker(0, Color::White).unwrap();
        board.place_checker(3, Color::Black).unwrap();
        assert_eq!(board.set_bar(Color::Black, 255), Err(EngineError::CheckerLimit(Color::Black)));
        board.set_bar(Color::Black, 14).unwrap();
        assert!(board.apply_move(Color::White, Origin::Point(0), 3).unwrap().hit);
        assert_eq!(board.bar_count(Color::Black), 15);
        assert_eq!(board.checker_count(Color::Black), 15);
    }
}
