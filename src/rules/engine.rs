//! Command dispatch.
//!
//! Front ends talk to a game through three entry points:
//! - `GameState::apply`: run a command against a state in place
//! - `step`: the same, returning a new state and leaving the input alone
//! - `legal_commands`: which commands would currently be accepted, for
//!   enabling buttons or listing shell verbs

use tracing::debug;

use super::transitions::Transition;
use crate::core::{Command, CommandKind, GameState, Phase};
use crate::error::GameError;

impl GameState {
    /// Apply a command. On `Err` the state is unchanged.
    ///
    /// ```
    /// use five_crowns::core::{Command, GameState, Phase};
    ///
    /// let mut state = GameState::default();
    /// state.apply(&Command::add_player("Ann")).unwrap();
    /// state.apply(&Command::add_player("Bo")).unwrap();
    /// state.apply(&Command::Start).unwrap();
    /// assert_eq!(state.phase(), Phase::Playing);
    ///
    /// // Rejected commands are reported, never half-applied.
    /// assert!(state.apply(&Command::CompleteRound).is_err());
    /// ```
    pub fn apply(&mut self, command: &Command) -> Result<Transition, GameError> {
        let result = match command {
            Command::AddPlayer { name } => self.add_player(name),
            Command::RemovePlayer { index } => self.remove_player(*index),
            Command::RenamePlayer { index, name } => self.rename_player(*index, name),
            Command::Start => self.start(),
            Command::SetScore {
                player,
                value,
                round,
            } => match round {
                Some(round) => self.set_round_score(*round, *player, value),
                None => self.set_score(*player, value),
            },
            Command::CompleteRound => self.complete_round(),
            Command::Reset => Ok(self.reset()),
        };

        if let Err(err) = &result {
            debug!(command = %command.kind(), %err, "command rejected");
        }
        result
    }
}

/// Apply a command to a copy of `state`.
///
/// The copy shares the score rows with `state` until they are written, so
/// this is cheap enough to call for every user action.
pub fn step(state: &GameState, command: &Command) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.apply(command)?;
    Ok(next)
}

/// Commands the state would currently accept, ignoring their arguments.
///
/// A kind listed here can still be rejected for a bad argument (an empty
/// name, a seat that does not exist).
#[must_use]
pub fn legal_commands(state: &GameState) -> Vec<CommandKind> {
    let mut legal = Vec::new();

    match state.phase() {
        Phase::Setup => {
            if state.player_count() < state.config().seat_cap() {
                legal.push(CommandKind::AddPlayer);
            }
            if !state.players().is_empty() {
                legal.push(CommandKind::RemovePlayer);
                legal.push(CommandKind::RenamePlayer);
            }
            if state.can_start() {
                legal.push(CommandKind::Start);
            }
        }
        Phase::Playing => {
            legal.push(CommandKind::RenamePlayer);
            legal.push(CommandKind::SetScore);
            if state.is_round_complete() {
                legal.push(CommandKind::CompleteRound);
            }
        }
        Phase::Complete => {}
    }

    legal.push(CommandKind::Reset);
    legal
}

/// True if `kind` appears in [`legal_commands`].
#[must_use]
pub fn is_legal(state: &GameState, kind: CommandKind) -> bool {
    legal_commands(state).contains(&kind)
}
