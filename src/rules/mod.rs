//! Game rules: transitions, command dispatch, and scoring.
//!
//! - `transitions`: the roster and round-lifecycle operations on `GameState`
//! - `engine`: `apply`/`step` dispatch and legality queries
//! - `scoring`: totals and final standings

pub mod transitions;
pub mod engine;
pub mod scoring;

pub use transitions::{parse_score, Transition};
pub use engine::{is_legal, legal_commands, step};
pub use scoring::{placement_label, rankings, winner, Standing};
