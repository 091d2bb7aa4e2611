//! # dice-match
//!
//! A turn-based, multi-player dice match engine.
//!
//! Players take turns rolling a fixed number of dice. At the end of every
//! full round a pluggable scoring strategy decides who earns a point, and
//! the match ends when some player's score exactly equals the target.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Scoring**: Strategies are values implementing
//!    `ScoringStrategy`; the match never interprets rolls itself.
//!
//! 2. **Deterministic**: Every die and the seat shuffle draw from a seeded
//!    `GameRng`, so a seed reproduces a whole match.
//!
//! 3. **N-Player**: Any number of players; rounds are complete cycles
//!    through all of them.
//!
//! ## Example
//!
//! ```
//! use dice_match::{GameRng, Match, MatchConfig, StrategyKind};
//!
//! let config = MatchConfig::new(6, 1, 2).with_strategy(StrategyKind::AllEqual);
//! let mut game = Match::new(config, GameRng::new(42)).unwrap();
//! game.add_player("Juan").unwrap();
//! game.add_player("María").unwrap();
//! game.start();
//!
//! while !game.is_won() {
//!     game.take_turn().unwrap();
//! }
//!
//! // With a single die every roll scores, so both reach 2 together.
//! assert_eq!(game.winners().unwrap().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `dice`: Dice and per-player roll histories
//! - `scoring`: The `ScoringStrategy` trait and built-in strategies
//! - `game`: The match engine

pub mod core;
pub mod dice;
pub mod game;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, MatchConfig, Player, PlayerId, Result};

pub use crate::dice::{Die, RollVector, RoundPredicate, SoloRound};

pub use crate::scoring::{AllEqualFaces, HighestSum, ScoringStrategy, StrategyKind};

pub use crate::game::{Match, MatchState, MatchSummary, Standing};
