//! Errors reported by match and round operations.
//!
//! Every error is a local, synchronous signal raised by the operation that
//! found its precondition violated. Nothing is retried.

use thiserror::Error;

use super::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Players can only join while the match is in setup.
    #[error("cannot add more players: the match has already started")]
    AlreadyStarted,
    /// Turns require an explicit `start()` first.
    #[error("the match must be started explicitly with start()")]
    NotStarted,
    #[error("there are no players in the match")]
    NoPlayers,
    /// The match already has winners.
    #[error("the match is already finished")]
    AlreadyFinished,
    /// A solo round reported itself finished and was asked to roll again.
    #[error("the solo round is already finished")]
    RoundFinished,
    /// A strategy awarded more points than a score can hold.
    #[error("score overflow for {player}: {score} + {points}")]
    ScoreOverflow { player: PlayerId, score: u32, points: u32 },
    #[error("too many players: ids are limited to u32")]
    TooManyPlayers,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
