//! Core types: players, rounds, configuration, commands and state.
//!
//! Everything here is plain data plus read-only queries. State changes live
//! in `rules`.

pub mod player;
pub mod round;
pub mod config;
pub mod command;
pub mod state;

pub use player::{PlayerId, PlayerMap, Roster};
pub use round::{cards_dealt_for, wild_card_for, Round, WildCard, ROUND_COUNT};
pub use config::{GameConfig, MAX_SEATS};
pub use command::{Command, CommandKind};
pub use state::{GameState, Phase, ScoreCell, ScoreGrid};
