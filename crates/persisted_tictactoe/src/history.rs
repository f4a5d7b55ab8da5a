//! Linear board history.

use crate::engine::apply_move;
use crate::{Board, HistoryError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered board snapshots from game start to the latest move.
///
/// Invariants, checked whenever a history is built from outside data:
/// - never empty;
/// - entry 0 is the empty board;
/// - entry `i` is exactly one legal move after entry `i - 1`.
///
/// Serialized as a plain array of boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    boards: Vec<Board>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// A history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Builds a history from raw boards, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`HistoryError`] found.
    #[instrument(skip(boards), fields(len = boards.len()))]
    pub fn from_boards(boards: Vec<Board>) -> Result<Self, HistoryError> {
        let first = boards.first().ok_or(HistoryError::Empty)?;
        if *first != Board::new() {
            return Err(HistoryError::NotInitial);
        }

        for (step, pair) in boards.windows(2).enumerate() {
            if !follows(&pair[0], &pair[1]) {
                return Err(HistoryError::Disconnected { step: step + 1 });
            }
        }

        Ok(Self { boards })
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Index of the latest snapshot.
    pub fn last_index(&self) -> usize {
        self.boards.len() - 1
    }

    /// The snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// The latest snapshot.
    pub fn latest(&self) -> &Board {
        &self.boards[self.last_index()]
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Appends a board produced by the engine from the current latest one.
    pub(crate) fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Keeps only the first `len` snapshots. Never drops the starting board.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.boards.truncate(len.max(1));
    }
}

/// True if `next` is `prev` plus one legal move.
fn follows(prev: &Board, next: &Board) -> bool {
    let mut changed = (0..Board::CELLS).filter(|&cell| prev.get(cell) != next.get(cell));
    match (changed.next(), changed.next()) {
        (Some(cell), None) => apply_move(prev, cell).as_ref() == Ok(next),
        _ => false,
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = HistoryError;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        Self::from_boards(boards)
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}
