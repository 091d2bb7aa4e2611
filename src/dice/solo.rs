//! One player's sequence of rolls.
//!
//! A `SoloRound` rolls a fixed number of dice per call and keeps every
//! resulting vector. After each roll an injected predicate looks at the
//! whole history and may declare the round finished, after which no more
//! rolls are accepted. Match play always injects the never-finishing
//! predicate (`SoloRound::open`); victory is decided by the match.

use smallvec::SmallVec;

use super::die::Die;
use crate::core::error::{GameError, Result};
use crate::core::GameRng;

/// Faces produced by one roll of all the dice in a turn.
pub type RollVector = SmallVec<[u32; 4]>;

/// Decides from the full history whether a solo round is over.
pub type RoundPredicate = Box<dyn Fn(&[RollVector]) -> bool>;

pub struct SoloRound {
    die: Die,
    dice_per_turn: usize,
    history: Vec<RollVector>,
    finished: bool,
    predicate: RoundPredicate,
}

impl SoloRound {
    /// Create a round with a custom terminal predicate.
    pub fn new(
        faces: u32,
        dice_per_turn: usize,
        rng: GameRng,
        predicate: impl Fn(&[RollVector]) -> bool + 'static,
    ) -> Result<Self> {
        if dice_per_turn == 0 {
            return Err(GameError::InvalidConfig("dice_per_turn must be at least 1".into()));
        }
        Ok(Self {
            die: Die::new(faces, rng)?,
            dice_per_turn,
            history: Vec::new(),
            finished: false,
            predicate: Box::new(predicate),
        })
    }

    /// Create a round that never finishes on its own.
    pub fn open(faces: u32, dice_per_turn: usize, rng: GameRng) -> Result<Self> {
        Self::new(faces, dice_per_turn, rng, |_| false)
    }

    /// Roll every die once and record the result.
    pub fn roll_once(&mut self) -> Result<RollVector> {
        if self.finished {
            return Err(GameError::RoundFinished);
        }

        let roll: RollVector = (0..self.dice_per_turn).map(|_| self.die.roll()).collect();
        self.history.push(roll.clone());
        self.finished = (self.predicate)(&self.history);
        Ok(roll)
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<&RollVector> {
        self.history.last()
    }

    /// Roll made in a given 1-based round.
    #[must_use]
    pub fn roll_at(&self, round: usize) -> Option<&RollVector> {
        round.checked_sub(1).and_then(|i| self.history.get(i))
    }

    #[must_use]
    pub fn full_history(&self) -> &[RollVector] {
        &self.history
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn dice_per_turn(&self) -> usize {
        self.dice_per_turn
    }

    #[must_use]
    pub fn faces(&self) -> u32 {
        self.die.faces()
    }

    /// Back to the initial state: no history, not finished.
    pub fn reset(&mut self) {
        self.die.reset();
        self.history.clear();
        self.finished = false;
    }
}

impl std::fmt::Debug for SoloRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoloRound")
            .field("die", &self.die)
            .field("dice_per_turn", &self.dice_per_turn)
            .field("history", &self.history)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
