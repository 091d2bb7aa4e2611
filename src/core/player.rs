//! Player identification and per-player match data.
//!
//! ## PlayerId
//!
//! Stable handle assigned by the match in join order. Seating order is
//! shuffled at start, but a player's id never changes.
//!
//! ## Player
//!
//! Display name, cumulative score and the player's own `SoloRound`. A player
//! only ever exists inside a match, which creates the round together with
//! the player.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::dice::{RollVector, SoloRound};

/// Player identifier, 0-based in the order players joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id for the player joining after `count` others.
    pub(crate) fn for_join(count: usize) -> Result<Self> {
        u32::try_from(count).map(Self).map_err(|_| GameError::TooManyPlayers)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a match.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
    round: SoloRound,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>, round: SoloRound) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            round,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative score. Never decreases.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// This player's roll history.
    #[must_use]
    pub fn round(&self) -> &SoloRound {
        &self.round
    }

    pub(crate) fn round_mut(&mut self) -> &mut SoloRound {
        &mut self.round
    }

    /// The player's most recent roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<&RollVector> {
        self.round.last_roll()
    }

    /// Score after adding `points`, without applying it.
    pub(crate) fn score_after(&self, points: u32) -> Result<u32> {
        self.score.checked_add(points).ok_or(GameError::ScoreOverflow {
            player: self.id,
            score: self.score,
            points,
        })
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        debug_assert!(score >= self.score, "scores never decrease");
        self.score = score;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
