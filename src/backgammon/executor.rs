use crate::backgammon::{AppliedMove, Board, Color, EngineError, Landing, Origin};

impl Board {
    /// Validates and plays a single-die move. On error nothing is changed, so
    /// callers may skip [`Board::check_move`].
    pub fn apply_move(
        &mut self,
        color: Color,
        origin: Origin,
        die: u8,
    ) -> Result<AppliedMove, EngineError> {
        let landing = self.check_move(color, origin, die)?;
        let mut next = *self;
        let hit = next.play_unchecked(color, origin, landing)?;
        *self = next;
        Ok(AppliedMove { color, origin, die, landing, hit })
    }

    /// Moves the checker without legality checks. Returns whether a blot was hit.
    fn play_unchecked(
        &mut self,
        color: Color,
        origin: Origin,
        landing: Landing,
    ) -> Result<bool, EngineError> {
        match origin {
            Origin::Bar => *self.bar_mut(color) -= 1,
            Origin::Point(index) => {
                self.pop_checker(index);
            }
        }

        match landing {
            Landing::BorneOff => {
                *self.borne_off_mut(color) += 1;
                Ok(false)
            }
            Landing::Point(index) => {
                let hit = self.owner_at(index) == Some(color.opposite());
                if hit {
                    self.pop_checker(index);
                    *self.bar_mut(color.opposite()) += 1;
                }
                self.push_checker(index, color)?;
                Ok(hit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgammon::IllegalMove;

    #[test]
    fn test_regular_move() {
        let mut board = Board::new();
        let applied = board.apply_move(Color::White, Origin::Point(0), 3).unwrap();
        assert_eq!(applied.landing, Landing::Point(3));
        assert!(!applied.hit);
        assert_eq!(board.count_on(0), Ok(1));
        assert_eq!(board.point_contents(3).unwrap(), &[Color::White]);
    }

    #[test]
    fn test_hit_sends_blot_to_bar() {
        let mut board = Board::empty();
        board.place_checker(12, Color::Black).unwrap();
        board.place_checker(10, Color::White).unwrap();
        let applied = board.apply_move(Color::Black, Origin::Point(12), 2).unwrap();
        assert!(applied.hit);
        assert_eq!(applied.landing, Landing::Point(10));
        assert_eq!(board.point_contents(10).unwrap(), &[Color::Black]);
        assert_eq!(board.count_on(12), Ok(0));
        assert_eq!(board.bar_count(Color::White), 1);
        assert_eq!(board.checker_count(Color::White), 1);
    }

    #[test]
    fn test_moving_onto_own_point_is_no_hit() {
        let mut board = Board::empty();
        board.place_checker(10, Color::Black).unwrap();
        board.place_checker(12, Color::Black).unwrap();
        let applied = board.apply_move(Color::Black, Origin::Point(12), 2).unwrap();
        assert!(!applied.hit);
        assert_eq!(board.point_contents(10).unwrap(), &[Color::Black, Color::Black]);
        assert_eq!(board.bar_count(Color::White), 0);
    }

    #[test]
    fn test_wrong_owner() {
        let mut board = Board::empty();
        board.place_checker(14, Color::White).unwrap();
        board.place_checker(12, Color::Black).unwrap();
        assert_eq!(
            board.apply_move(Color::White, Origin::Point(12), 2),
            Err(EngineError::IllegalMove(IllegalMove::WrongOwner))
        );
        assert_eq!(
            board.apply_move(Color::Black, Origin::Point(14), 2),
            Err(EngineError::IllegalMove(IllegalMove::WrongOwner))
        );
    }

    #[test]
    fn test_reentry_with_hit() {
        let mut board = Board::empty();
        board.set_bar(Color::White, 1).unwrap();
        board.place_checker(3, Color::Black).unwrap();
        let applied = board.apply_move(Color::White, Origin::Bar, 4).unwrap();
        assert!(applied.hit);
        assert!(applied.is_reentry());
        assert_eq!(board.bar_count(Color::White), 0);
        assert_eq!(board.bar_count(Color::Black), 1);
        assert_eq!(board.point_contents(3).unwrap(), &[Color::White]);
    }

    #[test]
    fn test_bear_off() {
        let mut board = Board::empty();
        board.place_checker(21, Color::White).unwrap();
        board.place_checker(23, Color::White).unwrap();
        let applied = board.apply_move(Color::White, Origin::Point(23), 1).unwrap();
        assert!(applied.is_bear_off());
        assert_eq!(board.borne_off_count(Color::White), 1);
        assert_eq!(board.count_on(23), Ok(0));
        board.apply_move(Color::White, Origin::Point(21), 5).unwrap();
        assert_eq!(board.borne_off_count(Color::White), 2);
    }

    #[test]
    fn test_rejection_leaves_board_untouched() {
        let mut board = Board::new();
        board.pop_checker(11);
        board.set_bar(Color::White, 1).unwrap();
        let before = board;
        assert_eq!(
            board.apply_move(Color::White, Origin::Point(0), 1),
            Err(EngineError::IllegalMove(IllegalMove::BarPending))
        );
        assert_eq!(
            board.apply_move(Color::White, Origin::Bar, 6),
            Err(EngineError::IllegalMove(IllegalMove::Blocked(5)))
        );
        assert_eq!(board, before);
    }
}
