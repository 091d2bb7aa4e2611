//! Scoring strategy trait.
//!
//! At the end of every round the match hands the strategy each player's
//! roll history, in seating order, and gets back the points each player
//! earned that round.
//!
//! ## Implementation Notes
//!
//! - The output has exactly one entry per input history, same order
//! - Every history has the same length when the match calls `evaluate`
//! - `evaluate` must be deterministic: same histories, same points
//!
//! Plain closures are strategies too:
//!
//! ```
//! use dice_match::dice::RollVector;
//! use dice_match::scoring::ScoringStrategy;
//!
//! // A point for every player whose last roll contains a six.
//! let any_six = |histories: &[&[RollVector]]| -> Vec<u32> {
//!     histories
//!         .iter()
//!         .map(|h| h.last().map_or(0, |r| u32::from(r.contains(&6))))
//!         .collect()
//! };
//!
//! let a: RollVector = [6, 1].into_iter().collect();
//! let b: RollVector = [2, 3].into_iter().collect();
//! assert_eq!(any_six.evaluate(&[&[a][..], &[b][..]]), vec![1, 0]);
//! ```

use serde::{Deserialize, Serialize};

use super::{AllEqualFaces, HighestSum};
use crate::core::error::GameError;
use crate::dice::RollVector;

pub trait ScoringStrategy {
    /// Short name for logs and summaries.
    fn name(&self) -> &str;

    /// Points earned this round by each player.
    fn evaluate(&self, histories: &[&[RollVector]]) -> Vec<u32>;
}

impl<F> ScoringStrategy for F
where
    F: Fn(&[&[RollVector]]) -> Vec<u32>,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn evaluate(&self, histories: &[&[RollVector]]) -> Vec<u32> {
        self(histories)
    }
}

/// The built-in strategies, selectable by name from config or the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// A point for every player whose last roll shows a single face.
    AllEqual,
    /// A point for every player tied for the highest last-roll sum.
    #[default]
    HighestSum,
}

impl StrategyKind {
    #[must_use]
    pub fn build(self) -> Box<dyn ScoringStrategy> {
        match self {
            StrategyKind::AllEqual => Box::new(AllEqualFaces),
            StrategyKind::HighestSum => Box::new(HighestSum),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::AllEqual => "all-equal",
            StrategyKind::HighestSum => "highest-sum",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-equal" => Ok(StrategyKind::AllEqual),
            "highest-sum" => Ok(StrategyKind::HighestSum),
            other => Err(GameError::InvalidConfig(format!(
                "unknown strategy '{}' (expected all-equal or highest-sum)",
                other
            ))),
        }
    }
}
