//! Grid game controller library.
//!
//! Orchestrates a turn-based N-by-N grid game (tic-tac-toe style) around
//! the pure board domain from `gridmark_board`:
//!
//! - **Engine**: the state machine sequencing turns, win/tie evaluation,
//!   and save/load requests
//! - **Storage**: interchangeable persistence backends behind one
//!   capability trait
//! - **Events**: the signals the engine consumes
//! - **View**: the callbacks the engine raises toward the rendering surface
//!
//! # Example
//!
//! ```no_run
//! use gridmark::storage::MemoryKeyValueStore;
//! use gridmark::{GameEngine, GameView, Player, UserAction};
//! use std::sync::{Arc, Mutex};
//!
//! struct SilentView;
//!
//! impl GameView for SilentView {
//!     fn start_game(&mut self, _current_player: Player) {}
//!     fn set_tile_mark(&mut self, _player: Player, _row: usize, _col: usize) {}
//!     fn change_turn(&mut self, _next_player: Player) {}
//!     fn game_won(&mut self, _winner: Player) {}
//!     fn game_tie(&mut self) {}
//! }
//!
//! # fn example() -> Result<(), gridmark::EngineError> {
//! let medium = Arc::new(Mutex::new(MemoryKeyValueStore::default()));
//! let mut engine = GameEngine::new(3, 3, Box::new(SilentView), medium)?;
//! engine.handle(UserAction::StartGame)?;
//! engine.handle(UserAction::TileClicked { row: 1, col: 1 })?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
pub mod storage;
mod view;

// Crate-level exports - engine
pub use engine::{EnginePhase, GameEngine};

// Crate-level exports - errors
pub use error::EngineError;

// Crate-level exports - boundaries
pub use events::UserAction;
pub use view::GameView;

// Crate-level exports - storage selection
pub use storage::StorageSource;

// Re-exported board domain types
pub use gridmark_board::{BoardState, GridSize, Player, StoredSnapshot, Tile};
