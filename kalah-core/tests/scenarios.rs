//! End-to-end game scenarios through the public API.

use kalah_core::board::{ONE_STORE, TWO_STORE};
use kalah_core::{Board, Capture, Game, GameError, MoveResolver, Outcome, Side};

fn game_from(cells: [u32; 14]) -> Game {
    let mut game = Game::with_board(Board::from_cells(cells));
    game.create_player("Lily").unwrap();
    game.create_player("Lucy").unwrap();
    game
}

// =============================================================================
// Sowing, capture and bonus turn
// =============================================================================

#[test]
fn opening_move_into_store_grants_bonus_turn() {
    let mut game = game_from([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    let report = game.apply_move(1, 3).unwrap();

    assert_eq!(report.board, [4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(report.side, Side::One);
    assert_eq!(report.seeds_sown, 4);
    assert!(report.bonus_turn);
    assert!(!report.game_over);
}

#[test]
fn empty_pit_move_changes_nothing() {
    let cells = [0, 4, 4, 4, 4, 4, 1, 4, 4, 4, 4, 4, 4, 0];
    let mut game = game_from(cells);
    let report = game.apply_move(1, 1).unwrap();

    assert_eq!(report.board, cells);
    assert_eq!(game.snapshot(), cells);
    assert!(report.capture.is_none());
    assert!(!report.bonus_turn);
}

#[test]
fn last_seed_in_own_empty_pit_captures_opposite() {
    let mut game = game_from([0, 4, 4, 4, 4, 8, 0, 4, 4, 4, 4, 4, 2, 0]);
    let store_before = game.board().store(Side::One);
    let report = game.apply_move(1, 6).unwrap();

    assert_eq!(
        report.capture,
        Some(Capture {
            pit_index: 0,
            opposite_index: 12,
            seeds: 4,
        })
    );
    assert_eq!(report.board[0], 0);
    assert_eq!(report.board[12], 0);
    // one seed for passing the store, four captured
    assert_eq!(report.board[ONE_STORE], store_before + 1 + 4);
}

#[test]
fn player_two_capture_mirrors_player_one() {
    let mut game = game_from([4, 4, 4, 4, 4, 2, 0, 4, 0, 4, 4, 4, 4, 0]);
    let report = game.apply_move(2, 6).unwrap();
    // index 12 sows 13, 0, 1, 2
    assert_eq!(report.landing, Some(2));
    assert!(report.capture.is_none());

    let mut game = game_from([4, 4, 4, 4, 4, 3, 0, 1, 0, 4, 4, 4, 4, 0]);
    let report = game.apply_move(2, 1).unwrap();
    assert_eq!(report.landing, Some(8));
    assert_eq!(
        report.capture,
        Some(Capture {
            pit_index: 8,
            opposite_index: 4,
            seeds: 5,
        })
    );
    assert_eq!(report.board[TWO_STORE], 5);
}

#[test]
fn thirteen_seeds_skip_opponent_store_once() {
    let mut game = game_from([0, 0, 13, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4, 0]);
    let report = game.apply_move(1, 3).unwrap();

    assert_eq!(report.landing, Some(2));
    assert_eq!(report.board[TWO_STORE], 0);
    // 2 refilled to one and captured with its opposite (index 10: 4 + 1)
    assert_eq!(report.capture.map(|c| c.seeds), Some(6));
    assert_eq!(report.board, [1, 1, 0, 1, 1, 1, 7, 5, 5, 5, 0, 5, 5, 0]);
}

// =============================================================================
// Game end and winner
// =============================================================================

#[test]
fn cleared_side_completes_game_and_winner_sweeps() {
    let mut game = game_from([0, 0, 0, 0, 0, 0, 22, 1, 2, 3, 4, 5, 6, 5]);
    assert!(game.is_complete());
    assert!(game.is_complete());

    assert_eq!(game.winner(), Ok(Outcome::Winner(Side::Two)));
    assert_eq!(game.board().store(Side::One), 22);
    assert_eq!(game.board().store(Side::Two), 26);
    assert_eq!(game.winner_message().unwrap(), "Winner is player 2: Lucy");
}

#[test]
fn winner_before_end_is_an_error() {
    let mut game = game_from([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(game.winner(), Err(GameError::GameNotEnded));
    assert_eq!(game.snapshot(), Board::initial().snapshot());
}

#[test]
fn moves_after_end_are_refused() {
    let mut game = game_from([0, 0, 0, 0, 0, 1, 23, 4, 4, 4, 4, 4, 4, 0]);
    let report = game.apply_move(1, 6).unwrap();
    assert!(report.game_over);
    assert_eq!(report.board, [0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);

    assert_eq!(game.apply_move(2, 3), Err(GameError::GameAlreadyEnded));
    assert_eq!(game.apply_move(2, 8), Err(GameError::InvalidPit(8)));
    assert_eq!(game.winner(), Ok(Outcome::Tie));
}

#[test]
fn resolver_trait_drives_a_game() {
    let mut resolver: Box<dyn MoveResolver> = Box::new(Game::new());
    resolver.apply_move(1, 3).unwrap();
    resolver.apply_move(1, 3).unwrap();
    assert_eq!(resolver.apply_move(1, 9), Err(GameError::InvalidPit(9)));
    assert_eq!(resolver.game().board().total_seeds(), 48);
}
