//! Shared test fixtures: a recording view and engine constructors.

#![allow(dead_code)]

use gridmark::storage::{MemoryKeyValueStore, SharedKeyValueStore};
use gridmark::{GameEngine, GameView, Player};
use std::sync::{Arc, Mutex};

/// One callback raised by the engine toward the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Started(Player),
    Mark(Player, usize, usize),
    Turn(Player),
    Won(Player),
    Tie,
}

/// View that records every callback for later assertions.
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    /// Creates a view plus a shared handle to its event log.
    pub fn channel() -> (Box<RecordingView>, Arc<Mutex<Vec<ViewEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let view = Box::new(RecordingView {
            events: Arc::clone(&events),
        });
        (view, events)
    }
}

impl GameView for RecordingView {
    fn start_game(&mut self, current_player: Player) {
        self.events.lock().unwrap().push(ViewEvent::Started(current_player));
    }

    fn set_tile_mark(&mut self, player: Player, row: usize, col: usize) {
        self.events.lock().unwrap().push(ViewEvent::Mark(player, row, col));
    }

    fn change_turn(&mut self, next_player: Player) {
        self.events.lock().unwrap().push(ViewEvent::Turn(next_player));
    }

    fn game_won(&mut self, winner: Player) {
        self.events.lock().unwrap().push(ViewEvent::Won(winner));
    }

    fn game_tie(&mut self) {
        self.events.lock().unwrap().push(ViewEvent::Tie);
    }
}

/// Engine on a `side` x `side` board with a fresh in-memory medium.
pub fn new_engine(side: usize) -> (GameEngine, Arc<Mutex<Vec<ViewEvent>>>, SharedKeyValueStore) {
    let medium: SharedKeyValueStore = Arc::new(Mutex::new(MemoryKeyValueStore::default()));
    let engine_medium = Arc::clone(&medium);
    let (view, events) = RecordingView::channel();
    let engine = GameEngine::new(side, side, view, engine_medium).expect("square board");
    (engine, events, medium)
}

/// Engine sharing an existing key-value medium with another engine.
pub fn new_engine_with_medium(
    side: usize,
    medium: SharedKeyValueStore,
) -> (GameEngine, Arc<Mutex<Vec<ViewEvent>>>) {
    let (view, events) = RecordingView::channel();
    let engine = GameEngine::new(side, side, view, medium).expect("square board");
    (engine, events)
}
