//! Round scoring.
//!
//! Strategies implement `ScoringStrategy` to decide who scores at the end of
//! a round. The match never interprets the rolls itself.

pub mod all_equal;
pub mod highest_sum;
pub mod strategy;

pub use all_equal::AllEqualFaces;
pub use highest_sum::HighestSum;
pub use strategy::{ScoringStrategy, StrategyKind};
