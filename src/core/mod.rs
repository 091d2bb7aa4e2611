//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use error::{GameError, Result};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
