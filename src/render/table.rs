//! Score tables.
//!
//! The live table is what players see between rounds: entered scores, a
//! marker on the round in progress, and totals masked until the last round
//! closes. The final table fills unset cells with zero and shows totals.

use super::{grid, truncate};
use crate::core::{GameState, Round};

/// Shown in place of a total while the game is in progress.
pub const HIDDEN_TOTAL: &str = "???";

fn header(state: &GameState) -> Vec<String> {
    let width = state.config().name_width;
    std::iter::once("Round".to_string())
        .chain(state.players().iter().map(|(_, name)| truncate(name, width)))
        .collect()
}

fn totals_row(state: &GameState, reveal: bool) -> Vec<String> {
    std::iter::once("Total".to_string())
        .chain(state.players().iter().map(|(player, _)| {
            if reveal {
                state.scores().total_for(player).to_string()
            } else {
                HIDDEN_TOTAL.to_string()
            }
        }))
        .collect()
}

/// Running table. Unset cells show `-`.
#[must_use]
pub fn render_live_table(state: &GameState) -> String {
    let complete = state.is_complete();
    let mut rows: Vec<Vec<String>> = Round::all()
        .map(|round| {
            let label = if round == state.current_round() && !complete {
                format!("{round} (current)")
            } else {
                round.to_string()
            };
            std::iter::once(label)
                .chain(state.players().iter().map(|(player, _)| {
                    state
                        .scores()
                        .get(round, player)
                        .map(|score| score.to_string())
                        .unwrap_or_else(|| "-".to_string())
                }))
                .collect()
        })
        .collect();
    rows.push(totals_row(state, complete));

    let mut out = grid(&header(state), &rows);
    if !complete {
        out.push_str("Totals are hidden until the game ends.\n");
    }
    out
}

/// End-of-game table. Unset cells count, and show, as zero.
#[must_use]
pub fn render_final_table(state: &GameState) -> String {
    let mut rows: Vec<Vec<String>> = state
        .scores()
        .rows()
        .map(|(round, row)| {
            std::iter::once(round.to_string())
                .chain(row.values().map(|cell| cell.unwrap_or(0).to_string()))
                .collect()
        })
        .collect();
    rows.push(totals_row(state, true));

    grid(&header(state), &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(names: &[&str]) -> GameState {
        let mut state = GameState::default();
        for name in names {
            state.add_player(name).unwrap();
        }
        state.start().unwrap();
        state
    }

    #[test]
    fn test_live_table_masks_totals() {
        let mut state = playing(&["Ann", "Bob"]);
        state.set_score(0, "12").unwrap();

        let table = render_live_table(&state);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Round       | Ann | Bob");
        assert_eq!(lines[2], "1 (current) | 12  | -");
        assert_eq!(lines[3], "2           | -   | -");
        assert_eq!(lines[13], "Total       | ??? | ???");
        assert_eq!(lines[14], "Totals are hidden until the game ends.");
    }

    #[test]
    fn test_live_table_truncates_names() {
        let state = playing(&["Maximiliana", "Bo"]);
        let table = render_live_table(&state);
        assert!(table.starts_with("Round       | Maximili... | Bo"));
    }

    #[test]
    fn test_final_table_reveals_totals() {
        let mut state = playing(&["Ann", "Bob"]);
        for round in 0..11 {
            state.set_score(0, &round.to_string()).unwrap();
            state.set_score(1, "0").unwrap();
            state.complete_round().unwrap();
        }
        assert!(state.is_complete());

        let table = render_final_table(&state);
        let last = table.lines().last().unwrap();
        assert_eq!(last, "Total | 55  | 0");

        let live = render_live_table(&state);
        assert!(!live.contains(HIDDEN_TOTAL));
        assert!(!live.contains("(current)"));
    }
}
