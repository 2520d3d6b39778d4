use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::misc::TinyVec;

/// Die values still to be played this turn: two values, or four on a double.
pub type RemainingDice = TinyVec<u8, 4>;

/// The two dice thrown at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    die1: u8,
    die2: u8,
}

impl Roll {
    /// Every distinct roll, doubles included, with its probability.
    pub fn all_with_probability() -> impl Iterator<Item = (Roll, f32)> {
        (1..=6u8).flat_map(|die1| {
            (die1..=6u8).map(move |die2| {
                let probability = if die1 == die2 { 1.0 / 36.0 } else { 2.0 / 36.0 };
                (Roll { die1, die2 }, probability)
            })
        })
    }

    /// `None` unless both values lie in 1..=6.
    pub fn new(die1: u8, die2: u8) -> Option<Self> {
        let valid = 1..=6;
        (valid.contains(&die1) && valid.contains(&die2)).then_some(Roll { die1, die2 })
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// The move multiset this roll grants.
    pub fn moves(&self) -> RemainingDice {
        let mut moves = RemainingDice::new();
        let count = if self.is_double() { 4 } else { 1 };
        for _ in 0..count {
            let _ = moves.try_push(self.die1);
        }
        if !self.is_double() {
            let _ = moves.try_push(self.die2);
        }
        moves
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.die1, self.die2)
    }
}

/// Source of dice for a game.
pub trait DiceSource {
    fn roll(&mut self) -> Roll;
}

/// Two independent uniform dice.
#[derive(Debug, Clone)]
pub struct RandomDice<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomDice { rng }
    }
}

impl RandomDice<StdRng> {
    /// Reproducible dice: the same seed yields the same sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        RandomDice { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomDice<StdRng> {
    fn default() -> Self {
        RandomDice { rng: StdRng::from_os_rng() }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn roll(&mut self) -> Roll {
        Roll {
            die1: self.rng.random_range(1..=6),
            die2: self.rng.random_range(1..=6),
        }
    }
}

/// Replays a fixed list of rolls, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<Roll>,
    next: usize,
}

impl ScriptedDice {
    /// `None` for an empty script or a value outside 1..=6.
    pub fn new(rolls: &[(u8, u8)]) -> Option<Self> {
        let rolls = rolls
            .iter()
            .map(|&(die1, die2)| Roll::new(die1, die2))
            .collect::<Option<Vec<_>>>()?;
        (!rolls.is_empty()).then_some(ScriptedDice { rolls, next: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Roll {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> Roll {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves() {
        for i in 1..=6 {
            for j in 1..=6 {
                let roll = Roll::new(i, j).unwrap();
                let moves = roll.moves();
                if i == j {
                    assert!(roll.is_double());
                    assert_eq!(&*moves, &[i; 4]);
                } else {
                    assert!(!roll.is_double());
                    assert_eq!(&*moves, &[i, j]);
                }
            }
        }
    }

    #[test]
    fn test_dice_roll() {
        let mut dice = RandomDice::seeded(7);
        for _ in 1..=100 {
            let roll = dice.roll();
            assert!(roll.die1() >= 1 && roll.die1() <= 6);
            assert!(roll.die2() >= 1 && roll.die2() <= 6);
            let len = roll.moves().len();
            if roll.is_double() {
                assert_eq!(len, 4);
            } else {
                assert_eq!(len, 2);
            }
        }
    }

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RandomDice::seeded(42);
        let mut b = RandomDice::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_dice_from_rng() {
        let mut from_rng = RandomDice::from_rng(StdRng::seed_from_u64(3));
        let mut seeded = RandomDice::seeded(3);
        for _ in 0..10 {
            assert_eq!(from_rng.roll(), seeded.roll());
        }
    }

    #[test]
    fn test_boxed_source() {
        let mut dice: Box<dyn DiceSource> = Box::new(ScriptedDice::new(&[(2, 5)]).unwrap());
        assert_eq!(dice.roll(), Roll::new(2, 5).unwrap());
        assert_eq!(dice.roll(), Roll::new(2, 5).unwrap());
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new(&[(3, 1), (6, 6)]).unwrap();
        assert_eq!(dice.roll(), Roll::new(3, 1).unwrap());
        assert_eq!(dice.roll(), Roll::new(6, 6).unwrap());
        assert_eq!(dice.roll(), Roll::new(3, 1).unwrap());
        assert!(ScriptedDice::new(&[]).is_none());
        assert!(ScriptedDice::new(&[(0, 3)]).is_none());
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let rolls: Vec<_> = Roll::all_with_probability().collect();
        assert_eq!(rolls.len(), 21);
        let total: f32 = rolls.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }
}
