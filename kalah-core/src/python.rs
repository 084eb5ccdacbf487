//! Python bindings.
//!
//! ```python
//! import kalah_core
//!
//! game = kalah_core.Mancala()
//! game.create_player("Lily")
//! game.create_player("Lucy")
//! report = game.play_game(1, 3)
//! assert report.bonus_turn
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Snapshot;
use crate::error::GameError;
use crate::game::Game;
use crate::moves::MoveReport;
use crate::render::{Renderer, TextRenderer};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python view of a [`MoveReport`].
#[pyclass(name = "MoveReport")]
#[derive(Clone, Copy, Debug)]
pub struct PyMoveReport(pub MoveReport);

#[pymethods]
impl PyMoveReport {
    #[getter]
    fn board(&self) -> Snapshot {
        self.0.board
    }

    #[getter]
    fn bonus_turn(&self) -> bool {
        self.0.bonus_turn
    }

    #[getter]
    fn captured(&self) -> u32 {
        self.0.capture.map_or(0, |c| c.seeds)
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveReport(board={:?}, bonus_turn={}, captured={}, game_over={})",
            self.0.board,
            self.0.bonus_turn,
            self.captured(),
            self.0.game_over
        )
    }
}

/// A game of Mancala with the permissive rules: no turn order.
#[pyclass(name = "Mancala")]
#[derive(Clone, Debug, Default)]
pub struct PyMancala {
    inner: Game,
}

#[pymethods]
impl PyMancala {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Register a player and return its number (1 or 2).
    fn create_player(&mut self, name: String) -> PyResult<u8> {
        Ok(self.inner.create_player(name)?.id())
    }

    fn get_player_name(&self, index: i64) -> PyResult<String> {
        Ok(self.inner.player(index)?.name().to_string())
    }

    fn play_game(&mut self, player_index: i64, pit_index: i64) -> PyResult<PyMoveReport> {
        Ok(PyMoveReport(self.inner.apply_move(player_index, pit_index)?))
    }

    fn game_complete(&self) -> bool {
        self.inner.is_complete()
    }

    fn return_winner(&mut self) -> PyResult<String> {
        Ok(self.inner.winner_message()?)
    }

    fn snapshot(&self) -> Snapshot {
        self.inner.snapshot()
    }

    fn render(&self) -> String {
        TextRenderer.render(&self.inner.snapshot(), self.inner.players())
    }

    fn __repr__(&self) -> String {
        format!("Mancala(board={:?})", self.inner.snapshot())
    }
}
