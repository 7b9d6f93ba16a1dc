//! ScoreKeeper bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, GameState, Phase};
use crate::render;

fn to_py_err(err: crate::error::GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Cards dealt in a 1-based round.
#[pyfunction]
pub fn cards_dealt_for(round: u8) -> PyResult<u8> {
    crate::core::cards_dealt_for(round).map_err(to_py_err)
}

/// Wild rank label ("3" .. "K") in a 1-based round.
#[pyfunction]
pub fn wild_card_for(round: u8) -> PyResult<&'static str> {
    crate::core::wild_card_for(round).map(|w| w.label()).map_err(to_py_err)
}

/// Python wrapper for a game in progress.
///
/// Commands return `True` when applied and `False` when rejected; a
/// rejected command leaves the game unchanged, and `last_error` says why.
#[pyclass(name = "ScoreKeeper")]
pub struct PyScoreKeeper {
    state: GameState,
    last_error: Option<String>,
}

impl PyScoreKeeper {
    fn record<T>(&mut self, result: Result<T, crate::error::GameError>) -> bool {
        match result {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                false
            }
        }
    }
}

#[pymethods]
impl PyScoreKeeper {
    /// Create a new game in setup.
    ///
    /// # Arguments
    /// - min_players: Players needed to start
    /// - max_players: Seats at the table (at most 8)
    #[new]
    #[pyo3(signature = (min_players = 2, max_players = 8))]
    fn new(min_players: usize, max_players: usize) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_min_players(min_players)
            .with_max_players(max_players);
        config.validate().map_err(to_py_err)?;
        Ok(Self {
            state: GameState::new(config),
            last_error: None,
        })
    }

    // === Commands ===

    fn add_player(&mut self, name: &str) -> bool {
        let result = self.state.add_player(name);
        self.record(result)
    }

    fn remove_player(&mut self, index: usize) -> bool {
        let result = self.state.remove_player(index);
        self.record(result)
    }

    fn rename_player(&mut self, index: usize, name: &str) -> bool {
        let result = self.state.rename_player(index, name);
        self.record(result)
    }

    fn start(&mut self) -> bool {
        let result = self.state.start();
        self.record(result)
    }

    /// Record raw input for a player in the round in progress.
    fn set_score(&mut self, player: usize, value: &str) -> bool {
        let result = self.state.set_score(player, value);
        self.record(result)
    }

    fn complete_round(&mut self) -> bool {
        let result = self.state.complete_round();
        self.record(result)
    }

    fn reset(&mut self) {
        self.state.reset();
        self.last_error = None;
    }

    // === Queries ===

    /// Why the last command was rejected, if it was.
    #[getter]
    fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    #[getter]
    fn players(&self) -> Vec<String> {
        self.state.players().names().to_vec()
    }

    /// "setup", "playing" or "complete".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.state.phase() {
            Phase::Setup => "setup",
            Phase::Playing => "playing",
            Phase::Complete => "complete",
        }
    }

    #[getter]
    fn current_round(&self) -> u8 {
        self.state.current_round().number()
    }

    #[getter]
    fn current_dealer(&self) -> usize {
        self.state.current_dealer().index()
    }

    fn can_start(&self) -> bool {
        self.state.can_start()
    }

    fn is_round_complete(&self) -> bool {
        self.state.is_round_complete()
    }

    /// Score grid as 11 rows of optional ints; empty before the game starts.
    fn scores(&self) -> Vec<Vec<Option<u64>>> {
        self.state
            .scores()
            .rows()
            .map(|(_, row)| row.values().copied().collect())
            .collect()
    }

    fn total_for(&self, index: usize) -> PyResult<u64> {
        self.state
            .total_for(index)
            .ok_or_else(|| PyValueError::new_err(format!("no player at index {index}")))
    }

    /// List of (position, name, total), winner first.
    fn rankings(&self) -> Vec<(usize, String, u64)> {
        self.state
            .rankings()
            .into_iter()
            .map(|s| (s.position, s.name, s.total))
            .collect()
    }

    /// The current screen as text.
    fn render(&self) -> String {
        render::screen(&self.state)
    }

    fn __repr__(&self) -> String {
        format!(
            "ScoreKeeper(players={}, round={}, phase={})",
            self.state.player_count(),
            self.state.current_round(),
            self.phase()
        )
    }
}
