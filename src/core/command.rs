//! Commands: the only way a front end changes a game.
//!
//! A front end turns user input into a `Command` and hands it to
//! `GameState::apply` (or the pure `rules::step`). Commands are plain serde
//! data, so a scripted session is just a list of them.

use serde::{Deserialize, Serialize};

/// A requested state change.
///
/// ## Example
///
/// ```
/// use five_crowns::core::{Command, CommandKind};
///
/// let add = Command::add_player("Ann");
/// assert_eq!(add.kind(), CommandKind::AddPlayer);
///
/// let score = Command::set_score(0, "15");
/// assert_eq!(score.kind(), CommandKind::SetScore);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Seat a new player at the end of the roster.
    AddPlayer { name: String },

    /// Remove the player at a 0-based seat.
    RemovePlayer { index: usize },

    /// Change the name at a 0-based seat.
    RenamePlayer { index: usize, name: String },

    /// Close setup and deal round 1.
    Start,

    /// Record raw score input for a player.
    ///
    /// `round` defaults to the round in progress; naming any other round is
    /// rejected. `value` is parsed leniently, see `rules::parse_score`.
    SetScore {
        player: usize,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        round: Option<u8>,
    },

    /// Close the current round once every score is in.
    CompleteRound,

    /// Throw the game away and return to an empty setup.
    Reset,
}

impl Command {
    pub fn add_player(name: impl Into<String>) -> Self {
        Command::AddPlayer { name: name.into() }
    }

    pub fn rename_player(index: usize, name: impl Into<String>) -> Self {
        Command::RenamePlayer {
            index,
            name: name.into(),
        }
    }

    /// Score entry for the round in progress.
    pub fn set_score(player: usize, value: impl Into<String>) -> Self {
        Command::SetScore {
            player,
            value: value.into(),
            round: None,
        }
    }

    /// Which kind of command this is.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AddPlayer { .. } => CommandKind::AddPlayer,
            Command::RemovePlayer { .. } => CommandKind::RemovePlayer,
            Command::RenamePlayer { .. } => CommandKind::RenamePlayer,
            Command::Start => CommandKind::Start,
            Command::SetScore { .. } => CommandKind::SetScore,
            Command::CompleteRound => CommandKind::CompleteRound,
            Command::Reset => CommandKind::Reset,
        }
    }
}

/// Command discriminant, used for legality queries and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    AddPlayer,
    RemovePlayer,
    RenamePlayer,
    Start,
    SetScore,
    CompleteRound,
    Reset,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandKind::AddPlayer => "add player",
            CommandKind::RemovePlayer => "remove player",
            CommandKind::RenamePlayer => "rename player",
            CommandKind::Start => "start",
            CommandKind::SetScore => "set score",
            CommandKind::CompleteRound => "complete round",
            CommandKind::Reset => "reset",
        };
        f.write_str(name)
    }
}
