//! Game state: roster, round progress and the score grid.
//!
//! ## GameState
//!
//! The single owned value a front end holds for one game. Fields are read
//! through the query methods below; changes go through the transitions in
//! `rules` so every invariant is checked in one place.
//!
//! ## ScoreGrid
//!
//! Eleven rows, one per round, each a `PlayerMap` of optional scores. Rows
//! live in an `im::Vector` so cloning a state (for `rules::step` or a front
//! end keeping the previous screen) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap, Roster};
use super::round::{Round, WildCard, ROUND_COUNT};

/// A single score cell. `None` means nothing has been entered.
pub type ScoreCell = Option<u64>;

/// Top-level lifecycle stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Building the roster.
    #[default]
    Setup,
    /// Rounds in progress.
    Playing,
    /// All eleven rounds scored. Terminal until reset.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "in setup",
            Phase::Playing => "in play",
            Phase::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Per-round, per-player scores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreGrid {
    rows: Vector<PlayerMap<ScoreCell>>,
}

impl ScoreGrid {
    /// An empty grid (no game started).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Eleven rows of unset cells for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let row = PlayerMap::with_value(player_count, None);
        Self {
            rows: (0..ROUND_COUNT).map(|_| row.clone()).collect(),
        }
    }

    /// True before the game has started.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a round.
    #[must_use]
    pub fn row(&self, round: Round) -> Option<&PlayerMap<ScoreCell>> {
        self.rows.get(round.index())
    }

    /// Iterate over (Round, row) pairs in play order.
    pub fn rows(&self) -> impl Iterator<Item = (Round, &PlayerMap<ScoreCell>)> {
        Round::all().zip(self.rows.iter())
    }

    /// A single cell; `None` when unset or out of range.
    #[must_use]
    pub fn get(&self, round: Round, player: PlayerId) -> ScoreCell {
        self.row(round).and_then(|row| row.get(player)).copied().flatten()
    }

    /// Number of unset cells in a round. Zero when the grid is empty.
    #[must_use]
    pub fn missing(&self, round: Round) -> usize {
        self.row(round)
            .map(|row| row.values().filter(|cell| cell.is_none()).count())
            .unwrap_or(0)
    }

    /// True iff the round exists and every cell in it is set.
    #[must_use]
    pub fn is_round_filled(&self, round: Round) -> bool {
        self.row(round).is_some() && self.missing(round) == 0
    }

    /// Sum of a player's cells across all rounds, unset counting as zero.
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn total_for(&self, player: PlayerId) -> u64 {
        self.rows
            .iter()
            .filter_map(|row| row.get(player).copied().flatten())
            .fold(0, u64::saturating_add)
    }

    pub(crate) fn set(&mut self, round: Round, player: PlayerId, cell: ScoreCell) {
        if let Some(row) = self.rows.get_mut(round.index()) {
            if let Some(slot) = row.get_mut(player) {
                *slot = cell;
            }
        }
    }
}

/// Complete state of one game.
///
/// Serializes for snapshots and logging. It is never read back, so every
/// state in existence was built by the transitions in `rules`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) roster: Roster,
    pub(crate) current_round: Round,
    pub(crate) current_dealer: PlayerId,
    pub(crate) scores: ScoreGrid,
    pub(crate) phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// A fresh game in setup with an empty roster.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            roster: Roster::new(),
            current_round: Round::FIRST,
            current_dealer: PlayerId::new(0),
            scores: ScoreGrid::empty(),
            phase: Phase::Setup,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_round(&self) -> Round {
        self.current_round
    }

    #[must_use]
    pub fn current_dealer(&self) -> PlayerId {
        self.current_dealer
    }

    /// Name of the player dealing this round.
    #[must_use]
    pub fn dealer_name(&self) -> Option<&str> {
        self.roster.name(self.current_dealer)
    }

    /// Cards dealt in the round in progress.
    #[must_use]
    pub fn cards_dealt(&self) -> u8 {
        self.current_round.cards_dealt()
    }

    /// Wild rank in the round in progress.
    #[must_use]
    pub fn wild_card(&self) -> WildCard {
        self.current_round.wild_card()
    }

    /// Read-only score grid.
    #[must_use]
    pub fn scores(&self) -> &ScoreGrid {
        &self.scores
    }

    /// Current entry for a player in the round in progress.
    #[must_use]
    pub fn current_score(&self, player: PlayerId) -> ScoreCell {
        self.scores.get(self.current_round, player)
    }

    /// Enough players are seated to deal round 1.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.roster.len() >= self.config.players_needed()
    }

    /// Every player has a score for the round in progress.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.scores.is_round_filled(self.current_round)
    }

    /// Unset cells left in the round in progress.
    #[must_use]
    pub fn missing_scores(&self) -> usize {
        self.scores.missing(self.current_round)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Running total for the player at `index`, or `None` if no one sits
    /// there. Always computable; front ends decide whether to show it.
    #[must_use]
    pub fn total_for(&self, index: usize) -> Option<u64> {
        (index < self.roster.len()).then(|| self.scores.total_for(PlayerId(index as u8)))
    }
}
