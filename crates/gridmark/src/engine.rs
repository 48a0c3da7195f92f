//! Turn-sequencing state machine for the grid game.

use crate::error::EngineError;
use crate::events::UserAction;
use crate::storage::{
    BoardStorage, SharedKeyValueStore, StorageSource, create_storage,
};
use crate::view::GameView;
use gridmark_board::{BoardState, GridSize, Player, Tile, check_winner};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of the engine.
///
/// `InProgress` is re-entered only through an explicit start signal; a
/// finished game never resumes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Waiting for the first start signal.
    AwaitingStart,
    /// Game running; moves accepted.
    InProgress,
    /// Game over with a winner.
    Won,
    /// Game over with a full board and no winner.
    Tied,
}

/// Orchestrates turn sequencing, move validation, win/tie evaluation, and
/// persistence requests.
///
/// The engine exclusively owns the single live [`BoardState`] and the
/// single active storage backend; every signal is handled synchronously to
/// completion before the next is accepted.
pub struct GameEngine {
    view: Box<dyn GameView>,
    board: BoardState,
    phase: EnginePhase,
    source: StorageSource,
    storage: Box<dyn BoardStorage>,
    medium: SharedKeyValueStore,
    live: bool,
}

impl GameEngine {
    /// Creates an engine for a `rows` x `columns` board.
    ///
    /// The durable backend is the initial target, matching the default
    /// selection in the UI this controller serves.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] unless the board is square
    /// and nonempty; setup aborts.
    #[instrument(skip(view, medium))]
    pub fn new(
        rows: usize,
        columns: usize,
        view: Box<dyn GameView>,
        medium: SharedKeyValueStore,
    ) -> Result<Self, EngineError> {
        let grid = GridSize::new(rows, columns)?;
        let source = StorageSource::Durable;
        let storage = create_storage(source, Arc::clone(&medium));
        info!(rows, columns, %source, "Engine initialized");
        Ok(Self {
            view,
            board: BoardState::new(grid),
            phase: EnginePhase::AwaitingStart,
            source,
            storage,
            medium,
            live: true,
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Read access to the live board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The storage source the next save/load will target by default.
    pub fn source(&self) -> StorageSource {
        self.source
    }

    /// Session teardown: stops handling signals and clears the board.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        info!("Engine shut down");
        self.board.reset();
        self.phase = EnginePhase::AwaitingStart;
        self.live = false;
    }

    /// Dispatches one external signal to completion.
    ///
    /// Before the first start signal only `StartGame` is listened for;
    /// other signals are dropped, mirroring deferred event subscription in
    /// the UI. After [`shutdown`](Self::shutdown) everything is dropped.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: UserAction) -> Result<(), EngineError> {
        if !self.live {
            debug!(?action, "Signal ignored after shutdown");
            return Ok(());
        }
        if self.phase == EnginePhase::AwaitingStart && action != UserAction::StartGame {
            debug!(?action, "Signal ignored before first game start");
            return Ok(());
        }
        match action {
            UserAction::StartGame => {
                self.on_start_game();
                Ok(())
            }
            UserAction::TileClicked { row, col } => {
                self.on_move_attempt(row, col);
                Ok(())
            }
            UserAction::SaveState(source) => self.on_save_request(source),
            UserAction::LoadState(source) => self.on_load_request(source),
        }
    }

    /// Starts (or restarts) a game: empty board, player A to move.
    #[instrument(skip(self))]
    fn on_start_game(&mut self) {
        self.board.reset();
        self.board.set_current_player(Player::A);
        self.phase = EnginePhase::InProgress;
        info!("Game started");
        self.view.start_game(Player::A);
    }

    /// Attempts a move at `(row, col)`.
    ///
    /// Out-of-range and occupied targets are silently dropped rather than
    /// surfaced; the click simply does nothing and the turn does not
    /// change.
    #[instrument(skip(self))]
    fn on_move_attempt(&mut self, row: usize, col: usize) {
        if self.phase != EnginePhase::InProgress {
            debug!(phase = ?self.phase, "Move ignored: no game in progress");
            return;
        }
        let grid = self.board.grid();
        if !grid.contains(row, col) {
            debug!("Move ignored: position outside the board");
            return;
        }
        let index = grid.to_index(row, col);
        let player = self.board.current_player();
        if let Err(err) = self.board.place_mark(index, player) {
            debug!(index, %err, "Move ignored");
            return;
        }
        debug!(index, ?player, "Mark placed");
        self.view.set_tile_mark(player, row, col);

        if let Some(winner) = check_winner(&self.board) {
            self.board.mark_won();
            self.phase = EnginePhase::Won;
            info!(?winner, "Game won");
            self.view.game_won(winner);
        } else if self.board.is_full() {
            self.board.mark_tied();
            self.phase = EnginePhase::Tied;
            info!("Game tied");
            self.view.game_tie();
        } else {
            self.board.switch_player();
            let next = self.board.current_player();
            debug!(?next, "Turn changed");
            self.view.change_turn(next);
        }
    }

    /// Serializes the board and hands it to the requested backend.
    #[instrument(skip(self))]
    fn on_save_request(&mut self, source: StorageSource) -> Result<(), EngineError> {
        self.switch_storage(source);
        let snapshot = self.board.serialize();
        self.storage.save(snapshot)?;
        info!(%source, "Board saved");
        Ok(())
    }

    /// Loads a snapshot from the requested backend and installs it.
    ///
    /// The live board is replaced wholesale only after the snapshot passes
    /// validation; on any error it is left untouched.
    #[instrument(skip(self))]
    fn on_load_request(&mut self, source: StorageSource) -> Result<(), EngineError> {
        self.switch_storage(source);
        let snapshot = match self.storage.load()? {
            Some(snapshot) => snapshot,
            None => {
                warn!(%source, "Load requested but nothing is saved");
                return Err(EngineError::NoSavedState(source));
            }
        };

        let expected = self.board.grid().cell_count();
        let found = snapshot.cell_count();
        if found != expected {
            warn!(expected, found, "Loaded snapshot does not fit the board");
            return Err(EngineError::CorruptState { expected, found });
        }

        let loaded = BoardState::deserialize(&snapshot)
            .map_err(|err| EngineError::Storage(err.into()))?;
        self.phase = if loaded.won() {
            EnginePhase::Won
        } else if loaded.tied() {
            EnginePhase::Tied
        } else {
            EnginePhase::InProgress
        };
        self.board = loaded;
        info!(%source, phase = ?self.phase, "Board loaded");
        self.rerender();
        Ok(())
    }

    /// Swaps the active backend when `source` differs from the current one.
    ///
    /// The previous backend instance is dropped; for the volatile backend
    /// that discards its snapshot.
    fn switch_storage(&mut self, source: StorageSource) {
        if source != self.source {
            info!(from = %self.source, to = %source, "Switching storage backend");
            self.source = source;
            self.storage = create_storage(source, Arc::clone(&self.medium));
        }
    }

    /// Replays the loaded board into the view: fresh start, every occupied
    /// tile, then the terminal banner if the game was already over.
    fn rerender(&mut self) {
        let player = self.board.current_player();
        self.view.start_game(player);

        let grid = self.board.grid();
        for index in 0..grid.cell_count() {
            if let Some(Tile::Owned(owner)) = self.board.tile(index) {
                let (row, col) = grid.to_row_col(index);
                self.view.set_tile_mark(owner, row, col);
            }
        }

        if self.board.won() {
            // The saved current player is the winner: a winning move never
            // switches the turn.
            self.view.game_won(player);
        } else if self.board.tied() {
            self.view.game_tie();
        }
    }
}
