//! The match engine.
//!
//! ## Turn cycle
//!
//! Players join during setup; `start()` shuffles the seating once and locks
//! it. Each `take_turn()` rolls for the player in the current seat and moves
//! to the next. When the cursor wraps back to seat 1 a round is complete:
//! the scoring strategy sees every player's history, points are awarded,
//! and anyone whose score now equals the target exactly wins.

use log::{debug, error, info, warn};

use super::state::{MatchState, MatchSummary, Standing};
use crate::core::error::{GameError, Result};
use crate::core::{GameRng, MatchConfig, Player, PlayerId};
use crate::dice::{RollVector, SoloRound};
use crate::scoring::ScoringStrategy;

/// A multi-player dice match.
///
/// Single-threaded by construction: one caller drives it through
/// `take_turn()` until `is_won()`.
pub struct Match {
    config: MatchConfig,
    strategy: Box<dyn ScoringStrategy>,
    rng: GameRng,
    players: Vec<Player>,
    turn: usize,
    started: bool,
    winners: Option<Vec<PlayerId>>,
}

impl Match {
    /// Create a match scored by the config's built-in strategy.
    pub fn new(config: MatchConfig, rng: GameRng) -> Result<Self> {
        let strategy = config.strategy.build();
        Self::from_parts(config, strategy, rng)
    }

    /// Create a match scored by a caller-supplied strategy.
    ///
    /// `config.strategy` is ignored.
    pub fn with_strategy(
        config: MatchConfig,
        strategy: impl ScoringStrategy + 'static,
        rng: GameRng,
    ) -> Result<Self> {
        Self::from_parts(config, Box::new(strategy), rng)
    }

    fn from_parts(config: MatchConfig, strategy: Box<dyn ScoringStrategy>, rng: GameRng) -> Result<Self> {
        config.validate()?;
        debug!(
            "new match: {}d{} per turn, target {}, strategy {}, seed {}",
            config.dice_per_turn,
            config.faces_per_die,
            config.target_score,
            strategy.name(),
            rng.seed()
        );
        Ok(Self {
            config,
            strategy,
            rng,
            players: Vec::new(),
            turn: 0,
            started: false,
            winners: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Add a player and give them their own solo round.
    ///
    /// Returns the number of players now in the match.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let id = PlayerId::for_join(self.players.len())?;
        let round = SoloRound::open(self.config.faces_per_die, self.config.dice_per_turn, self.rng.fork())?;
        let player = Player::new(id, name, round);
        debug!("{} joined as {}", player.name(), id);

        self.players.push(player);
        Ok(self.players.len())
    }

    /// Shuffle the seating and open play.
    ///
    /// Returns `false` without touching anything if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }

        // Seating depends only on the seed.
        self.rng.for_context("seating").shuffle(&mut self.players);
        self.started = true;
        self.turn = 0;

        info!(
            "match started with {} players: {}",
            self.players.len(),
            self.players.iter().map(Player::name).collect::<Vec<_>>().join(", ")
        );
        true
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        if self.winners.is_some() {
            MatchState::Finished
        } else if self.started {
            MatchState::Active
        } else {
            MatchState::Setup
        }
    }

    /// Seat whose turn it is, 1-based.
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.turn + 1
    }

    /// Player whose turn it is. `None` only when nobody has joined.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    /// Player in a 1-based seat.
    #[must_use]
    pub fn player(&self, turn: usize) -> Option<&Player> {
        turn.checked_sub(1).and_then(|i| self.players.get(i))
    }

    #[must_use]
    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// All players in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Roll for the current player and advance the turn.
    ///
    /// Returns `None` mid-round. At the end of a round returns the players
    /// who scored in it, possibly none.
    ///
    /// If the strategy's points would overflow a score, nothing from that
    /// round is applied and `GameError::ScoreOverflow` is returned.
    pub fn take_turn(&mut self) -> Result<Option<Vec<PlayerId>>> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.winners.is_some() {
            return Err(GameError::AlreadyFinished);
        }

        let player = &mut self.players[self.turn];
        let roll = player.round_mut().roll_once().map_err(|err| {
            error!("solo round for {} refused to roll: {}", player.name(), err);
            err
        })?;
        debug!("turn {}: {} rolled {:?}", self.turn + 1, player.name(), roll.as_slice());

        self.turn = (self.turn + 1) % self.players.len();
        if self.turn != 0 {
            return Ok(None);
        }

        self.score_round().map(Some)
    }

    fn score_round(&mut self) -> Result<Vec<PlayerId>> {
        let histories: Vec<&[RollVector]> = self.players.iter().map(|p| p.round().full_history()).collect();
        let points = self.strategy.evaluate(&histories);
        if points.len() != self.players.len() {
            warn!(
                "strategy {} returned {} results for {} players",
                self.strategy.name(),
                points.len(),
                self.players.len()
            );
        }

        // All totals are checked before any is applied.
        let totals = self
            .players
            .iter()
            .zip(&points)
            .map(|(player, &earned)| player.score_after(earned))
            .collect::<Result<Vec<u32>>>()
            .map_err(|err| {
                error!("round scoring aborted: {}", err);
                err
            })?;

        let mut round_winners = Vec::new();
        for ((player, &earned), total) in self.players.iter_mut().zip(&points).zip(totals) {
            player.set_score(total);
            if earned > 0 {
                debug!("{} scores {} (total {})", player.name(), earned, total);
                round_winners.push(player.id());
            }
        }

        let target = self.config.target_score;
        let match_winners: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.score() == target)
            .map(Player::id)
            .collect();

        info!(
            "round {} complete: {} player(s) scored",
            self.rounds_completed(),
            round_winners.len()
        );
        if !match_winners.is_empty() {
            info!("match won by {:?}", self.names(&match_winners));
            self.winners = Some(match_winners);
        }

        Ok(round_winners)
    }

    fn names(&self, ids: &[PlayerId]) -> Vec<&str> {
        ids.iter()
            .filter_map(|&id| self.player_by_id(id))
            .map(Player::name)
            .collect()
    }

    /// Round in progress, 1-based.
    ///
    /// Counted from the first seat's history; on turn 1 the next round has
    /// begun, so the count is one ahead.
    #[must_use]
    pub fn round_number(&self) -> usize {
        let Some(first) = self.players.first() else {
            return 0;
        };
        let played = first.round().rounds_played();
        if self.turn == 0 {
            played + 1
        } else {
            played
        }
    }

    /// Rounds every player has rolled in.
    #[must_use]
    pub fn rounds_completed(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.round().rounds_played())
            .min()
            .unwrap_or(0)
    }

    /// Roll made by whoever rolled last, i.e. the seat before the cursor.
    #[must_use]
    pub fn last_roll(&self) -> Option<&RollVector> {
        let count = self.players.len();
        if count == 0 {
            return None;
        }
        let previous = (self.turn + count - 1) % count;
        self.players[previous].last_roll()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.winners.is_some()
    }

    #[must_use]
    pub fn winners(&self) -> Option<&[PlayerId]> {
        self.winners.as_deref()
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            state: self.state(),
            strategy: self.strategy.name().to_string(),
            target_score: self.config.target_score,
            rounds_completed: self.rounds_completed(),
            standings: self
                .players
                .iter()
                .map(|p| Standing {
                    id: p.id(),
                    name: p.name().to_string(),
                    score: p.score(),
                    rounds_played: p.round().rounds_played(),
                })
                .collect(),
            winners: self.winners.clone(),
        }
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("players", &self.players)
            .field("turn", &self.turn)
            .field("started", &self.started)
            .field("winners", &self.winners)
            .finish_non_exhaustive()
    }
}
