//! Match orchestration.
//!
//! `Match` owns the players, sequences turns round-robin and asks the
//! scoring strategy who scored at the end of each round.

pub mod engine;
pub mod state;

pub use engine::Match;
pub use state::{MatchState, MatchSummary, Standing};
