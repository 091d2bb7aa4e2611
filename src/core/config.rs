//! Match configuration.
//!
//! A match is fixed at construction by:
//! - the dice geometry (`faces_per_die`, `dice_per_turn`)
//! - the score that wins the match (`target_score`)
//! - which built-in scoring strategy to use (`strategy`)
//!
//! Configs deserialize from JSON with every field optional; missing fields
//! fall back to the defaults (two six-sided dice, first to 3, highest sum).

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::scoring::StrategyKind;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Faces on every die (at least 1).
    pub faces_per_die: u32,

    /// Dice rolled together on each turn (at least 1).
    pub dice_per_turn: usize,

    /// Cumulative score that wins the match. Must be hit exactly.
    pub target_score: u32,

    /// Built-in strategy deciding who scores each round.
    pub strategy: StrategyKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            faces_per_die: 6,
            dice_per_turn: 2,
            target_score: 3,
            strategy: StrategyKind::HighestSum,
        }
    }
}

impl MatchConfig {
    /// Create a config with the given geometry and target, using the default strategy.
    pub fn new(faces_per_die: u32, dice_per_turn: usize, target_score: u32) -> Self {
        Self {
            faces_per_die,
            dice_per_turn,
            target_score,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_faces(mut self, faces: u32) -> Self {
        self.faces_per_die = faces;
        self
    }

    #[must_use]
    pub fn with_dice_per_turn(mut self, dice: usize) -> Self {
        self.dice_per_turn = dice;
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.faces_per_die < 1 {
            return Err(GameError::InvalidConfig("faces_per_die must be at least 1".into()));
        }
        if self.dice_per_turn < 1 {
            return Err(GameError::InvalidConfig("dice_per_turn must be at least 1".into()));
        }
        if self.target_score < 1 {
            return Err(GameError::InvalidConfig("target_score must be at least 1".into()));
        }
        Ok(())
    }
}
