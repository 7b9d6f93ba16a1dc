//! Python bindings for the five-crowns score keeper.
//!
//! Built with `--features python`. Exposes one class, `ScoreKeeper`, with
//! the same commands and queries as `GameState`.
//!
//! # Quick Start
//!
//! ```python
//! import five_crowns
//!
//! game = five_crowns.ScoreKeeper()
//! game.add_player("Ann")
//! game.add_player("Bob")
//! game.start()
//!
//! game.set_score(0, "12")
//! game.set_score(1, "0")
//! game.complete_round()
//! print(game.render())
//! ```

use pyo3::prelude::*;

mod py_keeper;

pub use py_keeper::*;

/// five_crowns: score keeping for Five Crowns.
#[pymodule]
fn five_crowns(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreKeeper>()?;
    m.add_function(wrap_pyfunction!(py_keeper::cards_dealt_for, m)?)?;
    m.add_function(wrap_pyfunction!(py_keeper::wild_card_for, m)?)?;
    Ok(())
}
