use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::error::GameError;

/// Board indices:
/// - 0-5: Player 1's pits 1-6
/// - 6: Player 1's store
/// - 7-12: Player 2's pits 1-6
/// - 13: Player 2's store
pub const ONE_PITS: Range<usize> = 0..6;
pub const ONE_STORE: usize = 6;
pub const TWO_PITS: Range<usize> = 7..13;
pub const TWO_STORE: usize = 13;
pub const CELLS: usize = 14;
pub const PITS_PER_SIDE: u8 = 6;
pub const INITIAL_SEEDS: u32 = 4;

/// The 14 cells in stable order: one's pits, one's store, two's pits, two's store.
pub type Snapshot = [u32; CELLS];

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    One = 1,
    Two = 2,
}

impl Side {
    /// Convert from a player identifier (1 or 2).
    pub fn from_id(id: i64) -> Result<Side, GameError> {
        match id {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn store_index(self) -> usize {
        match self {
            Side::One => ONE_STORE,
            Side::Two => TWO_STORE,
        }
    }

    pub fn pit_range(self) -> Range<usize> {
        match self {
            Side::One => ONE_PITS,
            Side::Two => TWO_PITS,
        }
    }

    /// Cell index of pit `pit` (1-6) on this side.
    pub fn pit_index(self, pit: u8) -> Result<usize, GameError> {
        if !(1..=PITS_PER_SIDE).contains(&pit) {
            return Err(GameError::InvalidPit(i64::from(pit)));
        }
        Ok(self.pit_range().start + usize::from(pit) - 1)
    }

    pub fn owns_pit(self, index: usize) -> bool {
        self.pit_range().contains(&index)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.id())
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Snapshot,
}

impl Board {
    /// Every pit holds [`INITIAL_SEEDS`], both stores are empty.
    pub fn initial() -> Self {
        let mut cells = [INITIAL_SEEDS; CELLS];
        cells[ONE_STORE] = 0;
        cells[TWO_STORE] = 0;
        Board { cells }
    }

    pub fn from_cells(cells: Snapshot) -> Self {
        Board { cells }
    }

    /// Copy of all 14 cells in stable order.
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }

    pub fn cell(&self, index: usize) -> u32 {
        self.cells[index]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Snapshot {
        &mut self.cells
    }

    pub fn store(&self, side: Side) -> u32 {
        self.cells[side.store_index()]
    }

    pub fn pits(&self, side: Side) -> &[u32] {
        &self.cells[side.pit_range()]
    }

    pub fn pit(&self, side: Side, pit: u8) -> Result<u32, GameError> {
        Ok(self.cells[side.pit_index(pit)?])
    }

    pub fn side_cleared(&self, side: Side) -> bool {
        self.pits(side).iter().all(|&s| s == 0)
    }

    /// True once either side's six pits are all empty.
    pub fn is_complete(&self) -> bool {
        self.side_cleared(Side::One) || self.side_cleared(Side::Two)
    }

    /// Sweep each side's remaining pit seeds into its own store and return the
    /// final cells. Only meaningful once [`Board::is_complete`] holds; a second
    /// call moves nothing.
    pub fn finalize(&mut self) -> Snapshot {
        for side in [Side::One, Side::Two] {
            let remaining: u32 = self.pits(side).iter().sum();
            self.cells[side.pit_range()].fill(0);
            self.cells[side.store_index()] += remaining;
        }
        self.cells
    }

    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        assert_eq!(
            board.snapshot(),
            [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]
        );
        assert_eq!(board.total_seeds(), 48);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_side_lookup() {
        assert_eq!(Side::from_id(1), Ok(Side::One));
        assert_eq!(Side::from_id(2), Ok(Side::Two));
        assert_eq!(Side::from_id(0), Err(GameError::InvalidPlayer(0)));
        assert_eq!(Side::from_id(3), Err(GameError::InvalidPlayer(3)));
    }

    #[test]
    fn test_pit_index() {
        assert_eq!(Side::One.pit_index(1), Ok(0));
        assert_eq!(Side::One.pit_index(6), Ok(5));
        assert_eq!(Side::Two.pit_index(1), Ok(7));
        assert_eq!(Side::Two.pit_index(6), Ok(12));
        assert_eq!(Side::One.pit_index(0), Err(GameError::InvalidPit(0)));
        assert_eq!(Side::Two.pit_index(7), Err(GameError::InvalidPit(7)));
        assert!(Side::Two.owns_pit(12));
        assert!(!Side::Two.owns_pit(TWO_STORE));
    }

    #[test]
    fn test_pit_lookup_rejects_out_of_range() {
        let board = Board::initial();
        assert_eq!(board.pit(Side::Two, 3), Ok(4));
        assert_eq!(board.pit(Side::One, 0), Err(GameError::InvalidPit(0)));
        assert_eq!(board.pit(Side::One, 200), Err(GameError::InvalidPit(200)));
    }

    #[test]
    fn test_complete_when_either_side_cleared() {
        let one_empty = Board::from_cells([0, 0, 0, 0, 0, 0, 20, 1, 2, 3, 4, 5, 6, 7]);
        assert!(one_empty.is_complete());

        let two_empty = Board::from_cells([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 27]);
        assert!(two_empty.is_complete());

        let neither = Board::from_cells([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 1, 26]);
        assert!(!neither.is_complete());
    }

    #[test]
    fn test_finalize_sweeps_pits_into_own_store() {
        let mut board = Board::from_cells([0, 0, 0, 0, 0, 0, 20, 1, 2, 3, 4, 5, 6, 7]);
        let total = board.total_seeds();
        let cells = board.finalize();
        assert_eq!(cells, [0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28]);
        assert_eq!(board.total_seeds(), total);

        // nothing left to sweep
        assert_eq!(board.finalize(), cells);
    }
}
