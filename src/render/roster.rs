//! Setup screen.

use crate::core::GameState;

/// Numbered roster with seat count and start readiness.
#[must_use]
pub fn render_roster(state: &GameState) -> String {
    let config = state.config();
    let mut out = format!("Players ({}/{})\n", state.player_count(), config.seat_cap());

    if state.players().is_empty() {
        out.push_str("  No players yet.\n");
    }
    for (player, name) in state.players().iter() {
        out.push_str(&format!("  {}. {}\n", player.index() + 1, name));
    }

    if state.can_start() {
        out.push_str("Ready to start.\n");
    } else {
        let short = config.players_needed().saturating_sub(state.player_count());
        out.push_str(&format!("Add {short} more player(s) to start.\n"));
    }
    out
}
