//! Plain-text views of a game.
//!
//! Every function here is a pure function of `&GameState`; front ends print
//! the result and never reach into the state themselves.
//!
//! - `roster`: setup screen
//! - `table`: live and final score tables
//! - `results`: winner banner and standings

pub mod roster;
pub mod table;
pub mod results;

use crate::core::{GameState, Phase};

pub use results::{render_results, winner_banner};
pub use roster::render_roster;
pub use table::{render_final_table, render_live_table, HIDDEN_TOTAL};

/// Cut `text` to `width` characters, marking the cut with `...`.
///
/// ```
/// use five_crowns::render::truncate;
///
/// assert_eq!(truncate("Bartholomew", 8), "Bartholo...");
/// assert_eq!(truncate("Ann", 8), "Ann");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut cut: String = text.chars().take(width).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

/// One-line summary of the round in progress.
#[must_use]
pub fn round_header(state: &GameState) -> String {
    let round = state.current_round();
    format!(
        "Round {} of {} | Cards dealt: {} | Wild: {} | Dealer: {}",
        round,
        crate::core::ROUND_COUNT,
        round.cards_dealt(),
        round.wild_card(),
        state.dealer_name().unwrap_or("-"),
    )
}

/// Score entry panel for the round in progress.
#[must_use]
pub fn score_entry(state: &GameState) -> String {
    let mut out = format!(
        "Round {} scores (0-{}):\n",
        state.current_round(),
        state.config().max_score_hint
    );
    for (player, name) in state.players().iter() {
        let entry = state
            .current_score(player)
            .map(|score| score.to_string())
            .unwrap_or_else(|| "_".to_string());
        out.push_str(&format!("  {}. {}: {}\n", player.index() + 1, name, entry));
    }

    match state.missing_scores() {
        0 => out.push_str("All scores entered.\n"),
        n => out.push_str(&format!("Waiting on {n} score(s).\n")),
    }
    out
}

/// The whole screen for the current phase.
#[must_use]
pub fn screen(state: &GameState) -> String {
    match state.phase() {
        Phase::Setup => render_roster(state),
        Phase::Playing => format!(
            "{}\n\n{}\n{}",
            round_header(state),
            score_entry(state),
            render_live_table(state)
        ),
        Phase::Complete => format!(
            "{}\n{}",
            render_results(state),
            render_final_table(state)
        ),
    }
}

/// Lay out rows of cells as a `|`-separated grid with a rule under the
/// header. Columns are padded to their widest cell.
pub(crate) fn grid(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = line(header);
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}
