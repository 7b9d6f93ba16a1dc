//! Totals and final standings. Lowest total wins.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};

/// One line of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 0-based finishing position; 0 is the winner.
    pub position: usize,
    pub player: PlayerId,
    pub name: String,
    pub total: u64,
}

impl Standing {
    /// Human label for the position.
    #[must_use]
    pub fn placement_label(&self) -> String {
        placement_label(self.position)
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.position == 0
    }
}

/// `1st Place - Winner!`, `2nd Place`, `3rd Place`, then `Nth Place`.
///
/// The table holds at most eight players, so the plain `th` suffix is right
/// for every position past third.
#[must_use]
pub fn placement_label(position: usize) -> String {
    match position {
        0 => "1st Place - Winner!".to_string(),
        1 => "2nd Place".to_string(),
        2 => "3rd Place".to_string(),
        n => format!("{}th Place", n + 1),
    }
}

/// Standings sorted by ascending total.
///
/// The sort is stable, so tied players stay in seat order.
#[must_use]
pub fn rankings(state: &GameState) -> Vec<Standing> {
    let mut standings: Vec<Standing> = state
        .players()
        .iter()
        .map(|(player, name)| Standing {
            position: 0,
            player,
            name: name.to_string(),
            total: state.scores().total_for(player),
        })
        .collect();

    standings.sort_by_key(|s| s.total);
    for (position, standing) in standings.iter_mut().enumerate() {
        standing.position = position;
    }
    standings
}

/// First entry of [`rankings`], or `None` for an empty roster.
#[must_use]
pub fn winner(state: &GameState) -> Option<Standing> {
    rankings(state).into_iter().next()
}

impl GameState {
    /// See [`rankings`].
    #[must_use]
    pub fn rankings(&self) -> Vec<Standing> {
        rankings(self)
    }

    /// See [`winner`].
    #[must_use]
    pub fn winner(&self) -> Option<Standing> {
        winner(self)
    }
}
