use std::fmt;

use crate::board::{Board, Side, Snapshot, ONE_PITS, ONE_STORE, TWO_PITS, TWO_STORE};
use crate::player::PlayerRegistry;

/// Turns a board snapshot into something a front end can show.
pub trait Renderer {
    fn render(&self, cells: &Snapshot, players: &PlayerRegistry) -> String;
}

/// Console layout: player 2's row reversed above player 1's, then a
/// store/pits summary per player. A complete board is shown finalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

/// Console view of one position.
pub struct BoardView<'a> {
    cells: Snapshot,
    players: &'a PlayerRegistry,
}

impl<'a> BoardView<'a> {
    pub fn new(cells: &Snapshot, players: &'a PlayerRegistry) -> Self {
        let mut board = Board::from_cells(*cells);
        if board.is_complete() {
            board.finalize();
        }
        BoardView {
            cells: board.snapshot(),
            players,
        }
    }

    fn write_side(&self, f: &mut fmt::Formatter<'_>, side: Side) -> fmt::Result {
        write!(f, "Player {}", side.id())?;
        if let Some(name) = self.players.name(side) {
            write!(f, " ({name})")?;
        }
        writeln!(f, ":")?;
        writeln!(f, "       store: {}", self.cells[side.store_index()])?;
        writeln!(f, "    pits 1-6: {:?}", &self.cells[side.pit_range()])
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = &self.cells;
        let mut two_row: Vec<u32> = cells[TWO_PITS].to_vec();
        two_row.reverse();

        writeln!(f, "================ GAME BOARD ================")?;
        writeln!(f, "Player 2:  {}   {:?}", cells[TWO_STORE], two_row)?;
        writeln!(f, "Player 1:      {:?}   {}", &cells[ONE_PITS], cells[ONE_STORE])?;
        writeln!(f)?;
        self.write_side(f, Side::One)?;
        writeln!(f)?;
        self.write_side(f, Side::Two)?;
        writeln!(f, "============================================")
    }
}

impl Renderer for TextRenderer {
    fn render(&self, cells: &Snapshot, players: &PlayerRegistry) -> String {
        BoardView::new(cells, players).to_string()
    }
}
