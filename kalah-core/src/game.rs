use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, Snapshot, PITS_PER_SIDE};
use crate::error::GameError;
use crate::moves::{resolve_move, MoveReport};
use crate::player::{Player, PlayerRegistry};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

/// Anything that accepts moves on behalf of a [`Game`]. Player and pit are
/// taken as wide integers so out-of-range input is reported as given.
pub trait MoveResolver {
    fn apply_move(&mut self, player: i64, pit: i64) -> Result<MoveReport, GameError>;

    fn game(&self) -> &Game;

    fn game_mut(&mut self) -> &mut Game;
}

/// One board and up to two players.
///
/// Turn order is not enforced: either player may move at any time, and an
/// empty pit is a legal move that sows nothing. Wrap the game in
/// [`crate::turns::TurnOrder`] for alternating play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: PlayerRegistry,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position.
    pub fn with_board(board: Board) -> Self {
        Self::with_players(board, PlayerRegistry::new())
    }

    pub fn with_players(board: Board, players: PlayerRegistry) -> Self {
        Game { board, players }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn create_player(&mut self, name: impl Into<String>) -> Result<Side, GameError> {
        self.players.register(name)
    }

    pub fn player(&self, id: i64) -> Result<&Player, GameError> {
        self.players.by_id(id)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Check a move request without touching the board. Pit range is checked
    /// before game end, which is checked before the player identifier.
    pub fn validate_move(&self, player: i64, pit: i64) -> Result<(Side, u8), GameError> {
        let pit = u8::try_from(pit)
            .ok()
            .filter(|p| (1..=PITS_PER_SIDE).contains(p))
            .ok_or(GameError::InvalidPit(pit))?;
        if self.board.is_complete() {
            return Err(GameError::GameAlreadyEnded);
        }
        Ok((Side::from_id(player)?, pit))
    }

    /// Apply one move for `player` (1 or 2) from `pit` (1-6). When the move
    /// empties a side the board is finalized before the report is returned.
    pub fn apply_move(&mut self, player: i64, pit: i64) -> Result<MoveReport, GameError> {
        let (side, pit) = self.validate_move(player, pit)?;
        let mut report = resolve_move(&mut self.board, side, pit)?;

        if self.board.is_complete() {
            report.board = self.board.finalize();
            report.game_over = true;
            tracing::info!(
                one = self.board.store(Side::One),
                two = self.board.store(Side::Two),
                "game complete"
            );
        }
        Ok(report)
    }

    /// Sweep remaining seeds and compare stores.
    pub fn winner(&mut self) -> Result<Outcome, GameError> {
        if !self.board.is_complete() {
            return Err(GameError::GameNotEnded);
        }
        self.board.finalize();

        let one = self.board.store(Side::One);
        let two = self.board.store(Side::Two);
        Ok(if one == two {
            Outcome::Tie
        } else if one > two {
            Outcome::Winner(Side::One)
        } else {
            Outcome::Winner(Side::Two)
        })
    }

    /// "Winner is player 1: <name>", or "It's a tie".
    pub fn winner_message(&mut self) -> Result<String, GameError> {
        Ok(match self.winner()? {
            Outcome::Tie => "It's a tie".to_string(),
            Outcome::Winner(side) => match self.players.name(side) {
                Some(name) => format!("Winner is {side}: {name}"),
                None => format!("Winner is {side}"),
            },
        })
    }
}

impl MoveResolver for Game {
    fn apply_move(&mut self, player: i64, pit: i64) -> Result<MoveReport, GameError> {
        Game::apply_move(self, player, pit)
    }

    fn game(&self) -> &Game {
        self
    }

    fn game_mut(&mut self) -> &mut Game {
        self
    }
}
