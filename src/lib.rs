//! # five-crowns
//!
//! Score keeping for Five Crowns: seat 2-8 players, enter scores for eleven
//! rounds, and rank the table at the end (lowest total wins).
//!
//! ## Design Principles
//!
//! 1. **One owned state**: a game is a single `GameState` value. There is no
//!    global; front ends hold the state and pass it to transitions.
//!
//! 2. **Validate, then mutate**: every transition checks all of its
//!    preconditions first. A rejected command returns a `GameError` and
//!    leaves the state exactly as it was, so callers can treat rejection as
//!    a silent no-op.
//!
//! 3. **Commands in, text out**: front ends turn input into `Command`s and
//!    print what `render` produces. Nothing in `core` or `rules` knows how
//!    it is displayed.
//!
//! ## Game Flow
//!
//! ```
//! use five_crowns::core::{Command, GameState, Phase};
//!
//! let mut game = GameState::default();
//! for name in ["Ann", "Bob", "Cy"] {
//!     game.add_player(name).unwrap();
//! }
//! game.start().unwrap();
//!
//! for _ in 0..11 {
//!     game.apply(&Command::set_score(0, "10")).unwrap();
//!     game.apply(&Command::set_score(1, "0")).unwrap();
//!     game.apply(&Command::set_score(2, "4")).unwrap();
//!     game.apply(&Command::CompleteRound).unwrap();
//! }
//!
//! assert_eq!(game.phase(), Phase::Complete);
//! assert_eq!(game.winner().unwrap().name, "Bob");
//! ```
//!
//! ## Modules
//!
//! - `core`: players, rounds, configuration, commands and state
//! - `rules`: transitions, command dispatch, scoring
//! - `render`: plain-text views
//! - `shell`: line-oriented terminal session
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;
pub mod render;
pub mod shell;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    cards_dealt_for, wild_card_for,
    PlayerId, PlayerMap, Roster,
    Round, WildCard, ROUND_COUNT,
    GameConfig,
    Command, CommandKind,
    GameState, Phase, ScoreCell, ScoreGrid,
};

pub use crate::error::GameError;

pub use crate::rules::{
    legal_commands, parse_score, rankings, step, winner,
    Standing, Transition,
};
