//! Rejection reasons for game transitions.
//!
//! Every transition validates before it mutates, so an `Err` always means the
//! state was left exactly as it was. Front ends are free to treat any of these
//! as a silent no-op.

use thiserror::Error;

use crate::core::{CommandKind, Phase};

/// Why a command was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player name is empty")]
    EmptyName,

    #[error("a player named {0:?} is already seated")]
    DuplicateName(String),

    #[error("the roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("no player at index {index} (roster has {len})")]
    PlayerOutOfRange { index: usize, len: usize },

    #[error("need at least {need} players to start, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("{command} is not allowed while the game is {phase}")]
    WrongPhase { command: CommandKind, phase: Phase },

    #[error("round {round} still has {missing} score(s) to enter")]
    RoundIncomplete { round: u8, missing: usize },

    #[error("round {0} does not exist (rounds run 1 to 11)")]
    RoundOutOfRange(u8),

    #[error("round {round} is closed; only round {current} can be scored")]
    RoundClosed { round: u8, current: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = GameError::DuplicateName("Ann".to_string());
        assert_eq!(err.to_string(), "a player named \"Ann\" is already seated");

        let err = GameError::WrongPhase {
            command: CommandKind::SetScore,
            phase: Phase::Complete,
        };
        assert_eq!(err.to_string(), "set score is not allowed while the game is complete");

        let err = GameError::RoundIncomplete { round: 4, missing: 2 };
        assert_eq!(err.to_string(), "round 4 still has 2 score(s) to enter");
    }
}
