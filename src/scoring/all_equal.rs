//! All-equal-faces scoring.

use super::ScoringStrategy;
use crate::dice::RollVector;

/// Awards a point to every player whose latest roll shows the same face on
/// every die. A single-die roll always qualifies; a player with no rolls
/// never does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllEqualFaces;

impl AllEqualFaces {
    fn all_equal(history: &[RollVector]) -> bool {
        match history.last() {
            Some(last) => last.windows(2).all(|pair| pair[0] == pair[1]),
            None => false,
        }
    }
}

impl ScoringStrategy for AllEqualFaces {
    fn name(&self) -> &str {
        "all-equal"
    }

    fn evaluate(&self, histories: &[&[RollVector]]) -> Vec<u32> {
        histories
            .iter()
            .map(|history| u32::from(Self::all_equal(history)))
            .collect()
    }
}
