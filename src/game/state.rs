//! Match lifecycle and standings.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a match is in its lifecycle.
///
/// `Setup -> Active -> Finished`. Nothing leaves `Finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Accepting players, no rolls yet.
    Setup,
    /// Turns proceed.
    Active,
    /// Some player hit the target score.
    Finished,
}

/// One player's line in the standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub rounds_played: usize,
}

/// Snapshot of a match, in seating order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub state: MatchState,
    pub strategy: String,
    pub target_score: u32,
    /// Rounds every player has completed.
    pub rounds_completed: usize,
    pub standings: Vec<Standing>,
    /// Set once the match is finished.
    pub winners: Option<Vec<PlayerId>>,
}

impl MatchSummary {
    /// Names of the winners, in seating order. Empty while the match runs.
    #[must_use]
    pub fn winner_names(&self) -> Vec<&str> {
        let Some(winners) = &self.winners else {
            return Vec::new();
        };
        self.standings
            .iter()
            .filter(|s| winners.contains(&s.id))
            .map(|s| s.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(winners: Option<Vec<PlayerId>>) -> MatchSummary {
        MatchSummary {
            state: if winners.is_some() { MatchState::Finished } else { MatchState::Active },
            strategy: "highest-sum".to_string(),
            target_score: 3,
            rounds_completed: 4,
            standings: vec![
                Standing { id: PlayerId::new(1), name: "María".into(), score: 3, rounds_played: 4 },
                Standing { id: PlayerId::new(0), name: "Juan".into(), score: 1, rounds_played: 4 },
            ],
            winners,
        }
    }

    #[test]
    fn test_winner_names() {
        assert!(summary(None).winner_names().is_empty());
        assert_eq!(summary(Some(vec![PlayerId::new(1)])).winner_names(), vec!["María"]);
    }

    #[test]
    fn test_summary_serialization() {
        let original = summary(Some(vec![PlayerId::new(1)]));
        let json = serde_json::to_string(&original).unwrap();
        let restored: MatchSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(original, restored);
        assert!(json.contains("\"state\":\"Finished\""));
    }
}
