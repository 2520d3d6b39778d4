use crate::backgammon::{
    BOARD_SIZE, Board, Color, EngineError, HalfMove, IllegalMove, Landing, Origin,
};

impl Board {
    /// Works out where a single-die move of `color` from `origin` ends, or why
    /// it may not be played. Never mutates the board.
    pub fn check_move(
        &self,
        color: Color,
        origin: Origin,
        die: u8,
    ) -> Result<Landing, EngineError> {
        if !(1..=6).contains(&die) {
            return Err(IllegalMove::DieMismatch.into());
        }

        let index = match origin {
            Origin::Bar => return self.check_reentry(color, die),
            Origin::Point(index) if index >= BOARD_SIZE => {
                return Err(EngineError::PointOutOfRange(index));
            }
            Origin::Point(index) => index,
        };

        if self.bar_count(color) > 0 {
            return Err(IllegalMove::BarPending.into());
        }
        match self.owner_at(index) {
            None => return Err(IllegalMove::EmptyOrigin.into()),
            Some(owner) if owner != color => return Err(IllegalMove::WrongOwner.into()),
            Some(_) => {}
        }

        let destination = color.advance(index, die);
        if (0..BOARD_SIZE as i8).contains(&destination) {
            let destination = destination as u8;
            if self.is_blocked_for(color, destination) {
                return Err(IllegalMove::Blocked(destination).into());
            }
            return Ok(Landing::Point(destination));
        }

        if !self.can_bear_off(color) {
            return Err(IllegalMove::NotHomeReady.into());
        }
        // An overshooting die only frees the rearmost checker.
        if die > color.distance_to_exit(index) && self.has_checker_behind(color, index) {
            return Err(IllegalMove::DieMismatch.into());
        }
        Ok(Landing::BorneOff)
    }

    fn check_reentry(&self, color: Color, die: u8) -> Result<Landing, EngineError> {
        if self.bar_count(color) == 0 {
            return Err(IllegalMove::EmptyBar.into());
        }
        let entry = color.entry_point(die);
        if self.is_blocked_for(color, entry) {
            return Err(IllegalMove::Blocked(entry).into());
        }
        Ok(Landing::Point(entry))
    }

    /// Cheap legality check. Out of range origins are simply not valid.
    pub fn is_valid_move(&self, color: Color, origin: Origin, die: u8) -> bool {
        self.check_move(color, origin, die).is_ok()
    }

    /// Origins `color` may currently move from: the bar while it holds a
    /// checker of `color`, otherwise every point `color` owns.
    pub fn movable_origins(&self, color: Color) -> Vec<Origin> {
        if self.bar_count(color) > 0 {
            return vec![Origin::Bar];
        }
        (0..BOARD_SIZE)
            .filter(|&i| self.owner_at(i) == Some(color))
            .map(Origin::Point)
            .collect()
    }

    /// Every legal single-die move for the distinct values in `dice`.
    pub fn legal_moves(&self, color: Color, dice: &[u8]) -> Vec<HalfMove> {
        let mut distinct: Vec<u8> = dice.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let origins = self.movable_origins(color);
        let mut moves = Vec::new();
        for die in distinct {
            for &origin in origins.iter() {
                if self.is_valid_move(color, origin, die) {
                    moves.push(HalfMove::new(origin, die));
                }
            }
        }
        moves
    }

    /// Short-circuiting form of [`Self::legal_moves`].
    pub fn has_legal_move(&self, color: Color, dice: &[u8]) -> bool {
        let origins = self.movable_origins(color);
        dice.iter()
            .any(|&die| origins.iter().any(|&origin| self.is_valid_move(color, origin, die)))
    }
}
