use crate::board::{Board, Side};
use crate::game::{Game, MoveResolver, Outcome};
use crate::turns::TurnOrder;

/// Play a random game with alternating turns and return the finished game.
pub fn random_playout(board: Board, seed: u64) -> Game {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut turns = TurnOrder::new(Game::with_board(board));

    while !turns.game().is_complete() {
        let pits = turns.legal_pits();
        if pits.is_empty() {
            break;
        }
        let pit = pits[rng.usize(..pits.len())];
        let player = i64::from(turns.to_move().id());
        if let Err(err) = turns.apply_move(player, i64::from(pit)) {
            // legal_pits only offers moves the wrapper accepts
            tracing::warn!(%err, "playout move rejected");
            break;
        }
    }

    turns.into_inner()
}

/// Win counts over many playouts from the same start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutTally {
    pub one_wins: u32,
    pub two_wins: u32,
    pub ties: u32,
}

/// Run multiple random playouts, seeding each from `base_seed`.
pub fn batch_random_playouts(board: Board, num_playouts: u32, base_seed: u64) -> PlayoutTally {
    let mut tally = PlayoutTally::default();

    for i in 0..num_playouts {
        let mut game = random_playout(board, base_seed.wrapping_add(u64::from(i)));
        match game.winner() {
            Ok(Outcome::Winner(Side::One)) => tally.one_wins += 1,
            Ok(Outcome::Winner(Side::Two)) => tally.two_wins += 1,
            Ok(Outcome::Tie) => tally.ties += 1,
            Err(err) => tracing::warn!(%err, "playout ended before completion"),
        }
    }

    tracing::debug!(?tally, num_playouts, "playouts finished");
    tally
}

/// Perft: count leaf positions at `depth` under alternating turns, calling
/// `visit` on every position reached.
pub fn perft_with<F>(turns: &TurnOrder, depth: u32, visit: &mut F) -> u64
where
    F: FnMut(&Game),
{
    visit(turns.game());
    if depth == 0 || turns.game().is_complete() {
        return 1;
    }

    let mut count = 0u64;
    for pit in turns.legal_pits() {
        let mut next = turns.clone();
        if next.apply_move(i64::from(turns.to_move().id()), i64::from(pit)).is_ok() {
            count += perft_with(&next, depth - 1, visit);
        }
    }
    count
}

pub fn perft(board: Board, depth: u32) -> u64 {
    perft_with(&TurnOrder::new(Game::with_board(board)), depth, &mut |_: &Game| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        let board = Board::initial();
        assert_eq!(perft(board, 0), 1);
        assert_eq!(perft(board, 1), 6);
        // pit 3 grants a bonus turn and leaves one with five non-empty pits
        assert_eq!(perft(board, 2), 35);
    }

    #[test]
    fn test_perft_conserves_seeds() {
        let mut visited = 0u64;
        perft_with(
            &TurnOrder::new(Game::new()),
            4,
            &mut |game: &Game| {
                visited += 1;
                assert_eq!(game.board().total_seeds(), 48);
            },
        );
        assert!(visited > 100);
    }

    #[test]
    fn test_random_playout_finishes() {
        let mut game = random_playout(Board::initial(), 7);
        assert!(game.is_complete());
        assert_eq!(game.board().total_seeds(), 48);
        assert!(game.winner().is_ok());
    }

    #[test]
    fn test_playouts_are_reproducible() {
        let a = random_playout(Board::initial(), 42);
        let b = random_playout(Board::initial(), 42);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_batch_counts_every_game() {
        let tally = batch_random_playouts(Board::initial(), 25, 1);
        assert_eq!(tally.one_wins + tally.two_wins + tally.ties, 25);
    }
}
