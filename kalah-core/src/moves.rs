use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, Snapshot, CELLS, PITS_PER_SIDE};
use crate::error::GameError;

/// Seeds relocated by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Cell where the last seed landed.
    pub pit_index: usize,
    /// Cell directly across from `pit_index`.
    pub opposite_index: usize,
    /// Seeds added to the mover's store (landing seed plus opposite pit).
    pub seeds: u32,
}

/// Result of applying a move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub side: Side,
    pub pit: u8,
    pub seeds_sown: u32,
    /// Cell that received the last seed, `None` when the pit was empty.
    pub landing: Option<usize>,
    pub capture: Option<Capture>,
    /// The mover's last seed ended in its own store.
    pub bonus_turn: bool,
    /// The move emptied a side and the board has been finalized.
    pub game_over: bool,
    pub board: Snapshot,
}

/// Get the opposite pit index for capture. Pit p of one side faces pit 7-p
/// of the other.
pub fn opposite_pit(index: usize) -> usize {
    debug_assert!(index < CELLS - 1 && index != Side::One.store_index());
    12 - index
}

/// Next cell in sowing order; 13 wraps to 0.
pub fn next_position(pos: usize) -> usize {
    (pos + 1) % CELLS
}

/// Pick up the seeds at `source` and drop one per cell going forward,
/// skipping the opponent's store. Returns the cell that got the last seed.
pub fn sow(board: &mut Board, side: Side, source: usize) -> Option<usize> {
    let skip = side.opponent().store_index();
    let cells = board.cells_mut();

    let mut seeds = cells[source];
    cells[source] = 0;

    let mut pos = source;
    let mut last = None;
    while seeds > 0 {
        pos = next_position(pos);
        if pos == skip {
            continue;
        }
        cells[pos] += 1;
        seeds -= 1;
        last = Some(pos);
    }
    last
}

/// Capture when the last seed made one of the mover's own pits hold exactly
/// one seed: that seed and everything opposite go to the mover's store.
pub fn try_capture(board: &mut Board, side: Side, landing: usize) -> Option<Capture> {
    if !side.owns_pit(landing) || board.cell(landing) != 1 {
        return None;
    }

    let opposite = opposite_pit(landing);
    let cells = board.cells_mut();
    let seeds = cells[landing] + cells[opposite];
    cells[side.store_index()] += seeds;
    cells[landing] = 0;
    cells[opposite] = 0;

    Some(Capture {
        pit_index: landing,
        opposite_index: opposite,
        seeds,
    })
}

/// Seeds that carry pit `pit` exactly onto its own store, with no lap.
pub fn seeds_to_store(pit: u8) -> u32 {
    u32::from(PITS_PER_SIDE + 1).saturating_sub(u32::from(pit))
}

/// Sow from `pit` (1-6) of `side`, then apply the capture and bonus-turn
/// rules. A bonus turn needs `pit + seeds == 7`: ending in the store after a
/// full lap does not count. Game-end handling belongs to the caller; the
/// returned report has `game_over` unset.
pub fn resolve_move(board: &mut Board, side: Side, pit: u8) -> Result<MoveReport, GameError> {
    let source = side.pit_index(pit)?;
    let seeds_sown = board.cell(source);

    let landing = sow(board, side, source);
    let capture = landing.and_then(|cell| try_capture(board, side, cell));
    let bonus_turn =
        landing == Some(side.store_index()) && seeds_sown == seeds_to_store(pit);

    tracing::debug!(
        player = side.id(),
        pit,
        seeds_sown,
        ?landing,
        "sowed seeds"
    );
    if let Some(capture) = &capture {
        tracing::info!(
            player = side.id(),
            pit_index = capture.pit_index,
            opposite_index = capture.opposite_index,
            seeds = capture.seeds,
            "captured seeds"
        );
    }
    if bonus_turn {
        tracing::info!("player {} takes another turn", side.id());
    }

    Ok(MoveReport {
        side,
        pit,
        seeds_sown,
        landing,
        capture,
        bonus_turn,
        game_over: false,
        board: board.snapshot(),
    })
}
