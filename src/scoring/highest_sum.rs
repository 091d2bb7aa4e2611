//! Highest-sum scoring.

use super::ScoringStrategy;
use crate::dice::RollVector;

/// Awards a point to every player whose latest roll has the highest sum.
///
/// Ties all score. A player with no rolls counts as a sum of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighestSum;

impl ScoringStrategy for HighestSum {
    fn name(&self) -> &str {
        "highest-sum"
    }

    fn evaluate(&self, histories: &[&[RollVector]]) -> Vec<u32> {
        let sums: Vec<u64> = histories
            .iter()
            .map(|history| {
                history
                    .last()
                    .map_or(0, |roll| roll.iter().map(|&v| u64::from(v)).sum())
            })
            .collect();

        let Some(&max) = sums.iter().max() else {
            return Vec::new();
        };

        sums.iter().map(|&sum| u32::from(sum == max)).collect()
    }
}
