//! Rules engine for two-player Mancala, Kalah variant: six pits and a store
//! per side, four seeds per pit at the start.
//!
//! - [`board`] holds the 14 cells and the completion / finalize queries
//! - [`moves`] sows seeds and applies the capture and bonus-turn rules
//! - [`game`] validates move requests and reports the winner
//! - [`turns`] adds optional alternating-turn enforcement

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod player;
pub mod render;
pub mod rules;
pub mod session;
pub mod simulation;
pub mod turns;

#[cfg(feature = "python")]
pub mod python;

pub use crate::board::{Board, Side, Snapshot};
pub use crate::error::{ConfigError, GameError};
pub use crate::game::{Game, MoveResolver, Outcome};
pub use crate::moves::{Capture, MoveReport};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn kalah_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMancala>()?;
    m.add_class::<python::PyMoveReport>()?;
    Ok(())
}
