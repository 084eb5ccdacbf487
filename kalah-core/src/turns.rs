//! Alternating play on top of the permissive core.
//!
//! [`Game`] accepts any player's move at any time. [`TurnOrder`] wraps it and
//! additionally requires the side to move to be the one whose turn it is and
//! the chosen pit to hold seeds. Player 1 moves first; a bonus turn keeps the
//! mover on turn.

use crate::board::{Side, PITS_PER_SIDE};
use crate::error::GameError;
use crate::game::{Game, MoveResolver};
use crate::moves::MoveReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    game: Game,
    to_move: Side,
}

impl TurnOrder {
    pub fn new(game: Game) -> Self {
        Self::starting_with(game, Side::One)
    }

    pub fn starting_with(game: Game, to_move: Side) -> Self {
        TurnOrder { game, to_move }
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn into_inner(self) -> Game {
        self.game
    }

    /// Pits the side to move may legally choose (1-6, non-empty).
    pub fn legal_pits(&self) -> Vec<u8> {
        if self.game.is_complete() {
            return Vec::new();
        }
        let pits = self.game.board().pits(self.to_move);
        (1..=PITS_PER_SIDE)
            .zip(pits)
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(pit, _)| pit)
            .collect()
    }
}

impl MoveResolver for TurnOrder {
    fn apply_move(&mut self, player: i64, pit: i64) -> Result<MoveReport, GameError> {
        let (side, pit) = self.game.validate_move(player, pit)?;
        if side != self.to_move {
            return Err(GameError::OutOfTurn {
                expected: self.to_move,
                got: side,
            });
        }
        if self.game.board().pit(side, pit)? == 0 {
            return Err(GameError::EmptyPit(pit));
        }

        let report = self.game.apply_move(player, i64::from(pit))?;
        if !report.bonus_turn {
            self.to_move = side.opponent();
        }
        tracing::debug!(next = self.to_move.id(), "turn passed");
        Ok(report)
    }

    fn game(&self) -> &Game {
        &self.game
    }

    fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}
