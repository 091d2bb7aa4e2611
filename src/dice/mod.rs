//! Dice and per-player roll tracking.
//!
//! - `Die`: one die, backed by its own RNG stream
//! - `SoloRound`: rolls `dice_per_turn` dice per call and keeps the history

pub mod die;
pub mod solo;

pub use die::Die;
pub use solo::{RollVector, RoundPredicate, SoloRound};
