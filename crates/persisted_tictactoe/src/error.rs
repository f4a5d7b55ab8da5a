//! Error types for moves, history, and board parsing.

use crate::Mark;

/// A move the rules do not allow.
///
/// Every way a move can be illegal is a value here; the engine never panics
/// on a bad cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The board already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Mark),

    /// The cell index is not 0-8.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OffBoard(usize),
}

impl std::error::Error for MoveError {}

/// Error raised by history navigation or by validating a restored history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// A jump targeted a step that does not exist.
    #[display("Step {step} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },

    /// The history had no boards at all.
    #[display("History must contain the starting board")]
    Empty,

    /// The first board was not empty.
    #[display("History must start from an empty board")]
    NotInitial,

    /// A board is not one legal move after its predecessor.
    #[display("Step {step} is not one legal move after the step before it")]
    Disconnected {
        /// Index of the offending board.
        step: usize,
    },
}

impl std::error::Error for HistoryError {}

/// A board string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid board: {}", _0)]
pub struct ParseBoardError(pub String);

impl std::error::Error for ParseBoardError {}
