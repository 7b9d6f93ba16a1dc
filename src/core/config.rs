//! Table configuration.
//!
//! The round schedule is fixed by the game; what a host can tune is the
//! seating range and a couple of presentation knobs. `GameConfig` is plain
//! serde data so front ends can load it from JSON.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Hard ceiling on seats; rows are stored inline for this many players.
pub const MAX_SEATS: usize = 8;

/// Game configuration.
///
/// ```
/// use five_crowns::core::GameConfig;
///
/// let config = GameConfig::default().with_max_players(6);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.min_players, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Players needed before the game can start.
    pub min_players: usize,

    /// Seats at the table.
    pub max_players: usize,

    /// Upper bound suggested to whoever is typing scores in.
    /// Stored scores are not clamped to it.
    pub max_score_hint: u32,

    /// Columns given to a player name in score tables before it is cut
    /// and suffixed with `...`.
    pub name_width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: MAX_SEATS,
            max_score_hint: 999,
            name_width: 8,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of players.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the score entry hint.
    #[must_use]
    pub fn with_max_score_hint(mut self, hint: u32) -> Self {
        self.max_score_hint = hint;
        self
    }

    /// Set the name column width.
    #[must_use]
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Seats actually offered. Never more than `MAX_SEATS`, whatever
    /// `max_players` says.
    #[must_use]
    pub fn seat_cap(&self) -> usize {
        self.max_players.min(MAX_SEATS)
    }

    /// Players needed before round 1 can be dealt. Never fewer than one.
    #[must_use]
    pub fn players_needed(&self) -> usize {
        self.min_players.max(1)
    }

    /// Check the seating range and display width.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players < 1 {
            return Err(GameError::InvalidConfig(
                "min_players must be at least 1".to_string(),
            ));
        }
        if self.max_players > MAX_SEATS {
            return Err(GameError::InvalidConfig(format!(
                "max_players must be at most {MAX_SEATS}"
            )));
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            )));
        }
        if self.name_width == 0 {
            return Err(GameError::InvalidConfig(
                "name_width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
