//! History controller: owns the history and cursor and persists both.

use crate::engine::{self, GameStatus};
use crate::rules::next_mover;
use crate::{Board, History, HistoryError, Mark, MoveError};
use derive_new::new;
use persisted_store::{LoadSource, Persisted, ValueStore};
use tracing::{debug, info, instrument, warn};

/// Default store key for the board history.
pub const HISTORY_KEY: &str = "tic-tac-toe:history";

/// Default store key for the cursor.
pub const CURSOR_KEY: &str = "currentStep";

/// Store keys the controller reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StoreKeys {
    /// Key holding the serialized history.
    #[new(into)]
    pub history: String,
    /// Key holding the serialized cursor.
    #[new(into)]
    pub cursor: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new(HISTORY_KEY, CURSOR_KEY)
    }
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Appended at the end of the history.
    Appended {
        /// Cursor after the move.
        step: usize,
    },
    /// Made from an earlier step: later snapshots were dropped first.
    Branched {
        /// Cursor after the move.
        step: usize,
        /// Number of snapshots dropped.
        discarded: usize,
    },
    /// Rejected by the rules. Nothing changed.
    Ignored(MoveError),
}

impl MoveOutcome {
    /// Returns true if the move changed the history.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// One entry of the enumerated history list.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Step {
    /// History index.
    pub index: usize,
    /// `Go to Game Start` or `Go to move #n`.
    pub label: String,
    /// True for the step under the cursor.
    pub current: bool,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.current {
            write!(f, "{} (current step)", self.label)
        } else {
            f.write_str(&self.label)
        }
    }
}

/// Tic-tac-toe controller with time travel.
///
/// The only component that mutates game state. Every mutation is written
/// through to the injected store; a failed write is logged and the
/// in-memory state stays authoritative.
#[derive(Debug)]
pub struct GameController<S> {
    store: S,
    history: Persisted<History>,
    cursor: Persisted<usize>,
}

impl<S: ValueStore> GameController<S> {
    /// Restores a game from `store` under the default keys.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StoreKeys::default())
    }

    /// Restores a game from `store` under `keys`.
    ///
    /// Missing values start a fresh game. A stored history that fails
    /// validation resets both history and cursor; a cursor past the end of
    /// the history is clamped to the latest step.
    #[instrument(skip(store))]
    pub fn with_keys(store: S, keys: StoreKeys) -> Self {
        let history = Persisted::load(&store, &keys.history, History::new());
        let mut cursor = Persisted::load(&store, &keys.cursor, 0usize);

        if history.source() == LoadSource::Rejected && *cursor.get() != 0 {
            warn!(cursor = *cursor.get(), "History was reset, resetting cursor");
            cursor.replace(0);
        }

        let last = history.get().last_index();
        if *cursor.get() > last {
            warn!(cursor = *cursor.get(), last, "Stored cursor past end of history, clamping");
            cursor.replace(last);
        }

        info!(
            len = history.get().len(),
            cursor = *cursor.get(),
            "Game restored"
        );

        Self {
            store,
            history,
            cursor,
        }
    }

    /// Plays the next mover's mark at `cell` on the current board.
    ///
    /// If the cursor is behind the latest step, everything after it is
    /// discarded before the new board is appended. Illegal moves change
    /// nothing and are reported as [`MoveOutcome::Ignored`].
    #[instrument(skip(self), fields(cursor = *self.cursor.get()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let board = match engine::apply_move(self.current_board(), cell) {
            Ok(board) => board,
            Err(e) => {
                debug!(error = %e, "Illegal move ignored");
                return MoveOutcome::Ignored(e);
            }
        };

        let cursor = *self.cursor.get();
        let history = self.history.get_mut();
        let discarded = history.last_index() - cursor;
        if discarded > 0 {
            info!(discarded, "Moving from an earlier step, dropping later steps");
            history.truncate(cursor + 1);
        }
        history.push(board);
        let step = history.last_index();
        self.cursor.replace(step);

        self.persist_history();
        self.persist_cursor();

        debug!(step, "Move applied");
        if discarded > 0 {
            MoveOutcome::Branched { step, discarded }
        } else {
            MoveOutcome::Appended { step }
        }
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` is not in the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.history.get().len();
        if step >= len {
            warn!(len, "Jump out of range");
            return Err(HistoryError::OutOfRange { step, len });
        }

        self.cursor.replace(step);
        self.persist_cursor();
        debug!("Cursor moved");
        Ok(())
    }

    /// Starts over with only the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.replace(History::new());
        self.cursor.replace(0);
        self.persist_history();
        self.persist_cursor();
        info!("Game restarted");
    }

    fn persist_history(&mut self) {
        if let Err(e) = self.history.save(&mut self.store) {
            warn!(error = %e, key = self.history.key(), "Failed to persist history");
        }
    }

    fn persist_cursor(&mut self) {
        if let Err(e) = self.cursor.save(&mut self.store) {
            warn!(error = %e, key = self.cursor.key(), "Failed to persist cursor");
        }
    }
}

impl<S> GameController<S> {
    /// The snapshot under the cursor.
    #[instrument(skip(self))]
    pub fn current_board(&self) -> &Board {
        // The cursor is kept within the history by every mutation.
        &self.history.get().boards()[*self.cursor.get()]
    }

    /// The full history.
    #[instrument(skip(self))]
    pub fn history(&self) -> &History {
        self.history.get()
    }

    /// The current step.
    #[instrument(skip(self))]
    pub fn cursor(&self) -> usize {
        *self.cursor.get()
    }

    /// True if the cursor is on the latest step.
    #[instrument(skip(self))]
    pub fn is_latest(&self) -> bool {
        self.cursor() == self.history().last_index()
    }

    /// Status of the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        engine::status(self.current_board())
    }

    /// Mark that moves next from the current board.
    #[instrument(skip(self))]
    pub fn next_mover(&self) -> Mark {
        next_mover(self.current_board())
    }

    /// The enumerated history list, one entry per snapshot.
    #[instrument(skip(self))]
    pub fn steps(&self) -> Vec<Step> {
        let cursor = self.cursor();
        (0..self.history().len())
            .map(|index| {
                let label = if index == 0 {
                    "Go to Game Start".to_string()
                } else {
                    format!("Go to move #{}", index)
                };
                Step::new(index, label, index == cursor)
            })
            .collect()
    }

    /// The injected store.
    #[instrument(skip(self))]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the controller, returning the store.
    #[instrument(skip(self))]
    pub fn into_store(self) -> S {
        self.store
    }
}
