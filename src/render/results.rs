//! Results screen.

use crate::core::GameState;
use crate::rules::Standing;

/// `NAME wins with N points!`, or `None` with nobody seated.
#[must_use]
pub fn winner_banner(state: &GameState) -> Option<String> {
    state
        .winner()
        .map(|w| format!("{} wins with {} points!", w.name, w.total))
}

fn standing_line(standing: &Standing, name_width: usize) -> String {
    format!(
        "  {:<20} {:<name_width$} {:>5} points",
        standing.placement_label(),
        standing.name,
        standing.total,
    )
}

/// Banner followed by the full standings.
#[must_use]
pub fn render_results(state: &GameState) -> String {
    let standings = state.rankings();
    let name_width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if let Some(banner) = winner_banner(state) {
        out.push_str(&banner);
        out.push_str("\n\n");
    }
    for standing in &standings {
        out.push_str(&standing_line(standing, name_width));
        out.push('\n');
    }
    out
}
