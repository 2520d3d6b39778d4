use crate::backgammon::{
    AppliedMove, BearOffPolicy, Board, Color, DiceSource, EngineError, HalfMove, IllegalMove,
    Landing, Origin, Player, RandomDice, RemainingDice, Roll, Rules,
};

/// Where the active player is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    AwaitingRoll,
    MovesPending,
    /// All dice are played or none of the remaining ones can be; the turn
    /// passes with [`Game::switch_player`].
    TurnComplete,
    GameOver,
}

/// Turn coordinator. Owns the board and both players for one match and
/// sequences rolls, moves and the hand-over between players.
///
/// White moves first after [`Game::setup`].
#[derive(Debug, Clone)]
pub struct Game<D: DiceSource = RandomDice> {
    board: Board,
    players: [Player; 2],
    active: Color,
    remaining: RemainingDice,
    last_roll: Option<Roll>,
    state: TurnState,
    rules: Rules,
    dice: D,
}

impl Game<RandomDice> {
    /// A game with dice seeded from the operating system.
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Game::with_dice(white, black, RandomDice::default())
    }

    /// A reproducible game.
    pub fn seeded(white: impl Into<String>, black: impl Into<String>, seed: u64) -> Self {
        Game::with_dice(white, black, RandomDice::seeded(seed))
    }
}

impl<D: DiceSource> Game<D> {
    pub fn with_dice(white: impl Into<String>, black: impl Into<String>, dice: D) -> Self {
        let mut game = Game {
            board: Board::empty(),
            players: [Player::new("", Color::White), Player::new("", Color::Black)],
            active: Color::White,
            remaining: RemainingDice::new(),
            last_roll: None,
            state: TurnState::AwaitingRoll,
            rules: Rules::default(),
            dice,
        };
        game.setup(white, black);
        game
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Starts a fresh game: names the players, puts the opening layout on
    /// the board and hands the first roll to White.
    pub fn setup(&mut self, white: impl Into<String>, black: impl Into<String>) {
        self.players = [Player::new(white, Color::White), Player::new(black, Color::Black)];
        self.board.setup();
        self.reset_turn(Color::White);
    }

    /// Continues from an arbitrary position with `active` to roll.
    pub fn set_position(&mut self, board: Board, active: Color) {
        self.board = board;
        self.reset_turn(active);
    }

    fn reset_turn(&mut self, active: Color) {
        self.active = active;
        self.remaining.clear();
        self.last_roll = None;
        self.state = if self.board.outcome().winner().is_some() {
            TurnState::GameOver
        } else {
            TurnState::AwaitingRoll
        };
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.slot()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Die values the active player still has to play.
    pub fn remaining_moves(&self) -> &[u8] {
        &self.remaining
    }

    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Throws the dice for the active player. If none of the values can be
    /// played the turn completes straight away.
    pub fn roll(&mut self) -> Result<Roll, EngineError> {
        match self.state {
            TurnState::AwaitingRoll => {}
            TurnState::GameOver => return Err(EngineError::GameOver),
            TurnState::MovesPending | TurnState::TurnComplete => {
                return Err(EngineError::NotAwaitingRoll);
            }
        }

        let roll = self.dice.roll();
        self.last_roll = Some(roll);
        self.remaining = roll.moves();
        self.state = TurnState::MovesPending;
        self.refresh_state();
        Ok(roll)
    }

    /// Plays one remaining die. On error the board and the remaining dice are
    /// unchanged and the player may try again.
    pub fn make_move(&mut self, origin: Origin, die: u8) -> Result<AppliedMove, EngineError> {
        match self.state {
            TurnState::MovesPending => {}
            TurnState::GameOver => return Err(EngineError::GameOver),
            TurnState::AwaitingRoll | TurnState::TurnComplete => {
                return Err(EngineError::NoRollPending);
            }
        }
        if !self.remaining.contains(&die) {
            return Err(EngineError::DieNotRolled(die));
        }

        self.check_policy(origin, die)?;
        let applied = self.board.apply_move(self.active, origin, die)?;
        self.remaining.remove_one(die);
        self.refresh_state();
        Ok(applied)
    }

    /// Rejects bear-offs the configured [`BearOffPolicy`] forbids.
    fn check_policy(&self, origin: Origin, die: u8) -> Result<(), EngineError> {
        if self.rules.bear_off_policy != BearOffPolicy::LargestDieFirst {
            return Ok(());
        }
        let bears_off =
            |die: u8| self.board.check_move(self.active, origin, die) == Ok(Landing::BorneOff);
        if bears_off(die) && self.remaining.iter().any(|&other| other > die && bears_off(other)) {
            return Err(IllegalMove::LargerDieRequired.into());
        }
        Ok(())
    }

    fn refresh_state(&mut self) {
        if self.board.outcome().winner().is_some() {
            self.remaining.clear();
            self.state = TurnState::GameOver;
        } else if !self.has_valid_moves() {
            self.state = TurnState::TurnComplete;
        }
    }

    /// Whether any remaining die can be played by the active player.
    pub fn has_valid_moves(&self) -> bool {
        self.board.has_legal_move(self.active, &self.remaining)
    }

    /// Every single-die move the active player may make right now.
    pub fn legal_moves(&self) -> Vec<HalfMove> {
        if self.state != TurnState::MovesPending {
            return Vec::new();
        }
        self.board
            .legal_moves(self.active, &self.remaining)
            .into_iter()
            .filter(|mv| self.check_policy(mv.origin(), mv.die()).is_ok())
            .collect()
    }

    /// Legality check for the active player, ignoring whether `die` was rolled.
    pub fn is_valid_move(&self, origin: Origin, die: u8) -> bool {
        self.board.is_valid_move(self.active, origin, die)
    }

    /// Hands the dice to the other player once the current turn is complete.
    /// Unplayable dice are discarded; the board is not touched.
    pub fn switch_player(&mut self) -> Result<(), EngineError> {
        match self.state {
            TurnState::TurnComplete => {}
            TurnState::GameOver => return Err(EngineError::GameOver),
            TurnState::MovesPending => return Err(EngineError::TurnInProgress),
            TurnState::AwaitingRoll => return Err(EngineError::NoRollPending),
        }
        self.remaining.clear();
        self.active = self.active.opposite();
        self.state = TurnState::AwaitingRoll;
        Ok(())
    }

    /// The player who has borne off all fifteen checkers, if any.
    pub fn check_winner(&self) -> Option<&Player> {
        self.board.outcome().winner().map(|color| self.player(color))
    }
}
