//! Gameplay tests: start semantics, turn sequencing, win and tie detection,
//! and the permissive handling of invalid move attempts.

mod common;

use common::{ViewEvent, new_engine};
use gridmark::{EngineError, EnginePhase, Player, Tile, UserAction};

fn click(row: usize, col: usize) -> UserAction {
    UserAction::TileClicked { row, col }
}

#[test]
fn test_start_game_resets_everything() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();

    assert_eq!(engine.phase(), EnginePhase::InProgress);
    assert_eq!(engine.board().current_player(), Player::A);
    assert!(engine.board().cells().iter().all(Tile::is_empty));
    assert_eq!(*events.lock().unwrap(), vec![ViewEvent::Started(Player::A)]);
}

#[test]
fn test_signals_before_first_start_are_dropped() {
    let (mut engine, events, _medium) = new_engine(3);

    engine.handle(click(0, 0)).unwrap();
    engine
        .handle(UserAction::LoadState(gridmark::StorageSource::Durable))
        .unwrap();

    assert_eq!(engine.phase(), EnginePhase::AwaitingStart);
    assert!(engine.board().cells().iter().all(Tile::is_empty));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_moves_alternate_turns() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    engine.handle(click(1, 1)).unwrap();

    assert_eq!(engine.board().current_player(), Player::B);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            ViewEvent::Started(Player::A),
            ViewEvent::Mark(Player::A, 1, 1),
            ViewEvent::Turn(Player::B),
        ]
    );
}

#[test]
fn test_row_win() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    // A takes the top row while B plays underneath.
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.handle(click(row, col)).unwrap();
    }

    assert_eq!(engine.phase(), EnginePhase::Won);
    assert!(engine.board().won());
    assert!(!engine.board().tied());
    // The winning move does not switch the turn.
    assert_eq!(engine.board().current_player(), Player::A);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&ViewEvent::Won(Player::A))
    );
}

#[test]
fn test_column_win_for_second_player() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    // B takes the left column; A scatters.
    for (row, col) in [(0, 1), (0, 0), (2, 2), (1, 0), (1, 2), (2, 0)] {
        engine.handle(click(row, col)).unwrap();
    }

    assert_eq!(engine.phase(), EnginePhase::Won);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&ViewEvent::Won(Player::B))
    );
}

#[test]
fn test_anti_diagonal_win_on_four_by_four() {
    let (mut engine, events, _medium) = new_engine(4);
    engine.handle(UserAction::StartGame).unwrap();
    // A walks down the anti-diagonal; B fills the top row (short of four).
    for (row, col) in [
        (0, 3),
        (0, 0),
        (1, 2),
        (0, 1),
        (2, 1),
        (0, 2),
        (3, 0),
    ] {
        engine.handle(click(row, col)).unwrap();
    }

    assert_eq!(engine.phase(), EnginePhase::Won);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&ViewEvent::Won(Player::A))
    );
}

#[test]
fn test_tie_on_full_board_without_line() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    // Fills the board with no three in a row: A B A / B A A / B A B.
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ] {
        engine.handle(click(row, col)).unwrap();
    }

    assert_eq!(engine.phase(), EnginePhase::Tied);
    assert!(engine.board().tied());
    assert!(!engine.board().won());
    assert_eq!(events.lock().unwrap().last(), Some(&ViewEvent::Tie));
}

#[test]
fn test_occupied_tile_is_silently_ignored() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    engine.handle(click(0, 0)).unwrap();

    let board_before = engine.board().clone();
    let events_before = events.lock().unwrap().len();

    engine.handle(click(0, 0)).unwrap();

    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.board().current_player(), Player::B);
    assert_eq!(events.lock().unwrap().len(), events_before);
}

#[test]
fn test_out_of_range_click_is_silently_ignored() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();

    let events_before = events.lock().unwrap().len();
    engine.handle(click(7, 0)).unwrap();
    engine.handle(click(0, 7)).unwrap();

    assert!(engine.board().cells().iter().all(Tile::is_empty));
    assert_eq!(engine.board().current_player(), Player::A);
    assert_eq!(events.lock().unwrap().len(), events_before);
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let (mut engine, _events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.handle(click(row, col)).unwrap();
    }
    assert_eq!(engine.phase(), EnginePhase::Won);

    let board_before = engine.board().clone();
    engine.handle(click(2, 2)).unwrap();
    assert_eq!(engine.board(), &board_before);
}

#[test]
fn test_restart_mid_game() {
    let (mut engine, _events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    engine.handle(click(0, 0)).unwrap();
    engine.handle(click(1, 1)).unwrap();

    engine.handle(UserAction::StartGame).unwrap();

    assert_eq!(engine.phase(), EnginePhase::InProgress);
    assert_eq!(engine.board().current_player(), Player::A);
    assert!(engine.board().cells().iter().all(Tile::is_empty));
}

#[test]
fn test_shutdown_stops_signal_handling() {
    let (mut engine, events, _medium) = new_engine(3);
    engine.handle(UserAction::StartGame).unwrap();
    engine.handle(click(0, 0)).unwrap();

    engine.shutdown();

    assert_eq!(engine.phase(), EnginePhase::AwaitingStart);
    assert!(engine.board().cells().iter().all(Tile::is_empty));

    let events_before = events.lock().unwrap().len();
    engine.handle(UserAction::StartGame).unwrap();
    assert_eq!(engine.phase(), EnginePhase::AwaitingStart);
    assert_eq!(events.lock().unwrap().len(), events_before);
}

#[test]
fn test_rejects_non_square_board() {
    let medium: gridmark::storage::SharedKeyValueStore = std::sync::Arc::new(
        std::sync::Mutex::new(gridmark::storage::MemoryKeyValueStore::default()),
    );
    let (view, _events) = common::RecordingView::channel();
    let result = gridmark::GameEngine::new(2, 3, view, medium);
    assert!(matches!(result, Err(EngineError::InvalidBoardSize(_))));
}
