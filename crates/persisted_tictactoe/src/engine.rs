//! Stateless game engine: status and rule-checked moves.

use crate::rules::{is_full, next_mover, winner};
use crate::{Board, Mark, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of a board, derived from the winner, the next mover and fullness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet and at least one empty cell.
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A line is complete.
    Won(Mark),
    /// Full board with no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// Computes the status of `board`.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: next_mover(board),
        }
    }
}

/// Places the next mover's mark at `cell`, returning the new board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::OffBoard`] if `cell` is not 0-8.
/// - [`MoveError::GameOver`] if `board` already has a winner.
/// - [`MoveError::SquareOccupied`] if the cell holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, cell: usize) -> Result<Board, MoveError> {
    if cell >= Board::CELLS {
        return Err(MoveError::OffBoard(cell));
    }

    if let Some(mark) = winner(board) {
        return Err(MoveError::GameOver(mark));
    }

    if !board.is_empty(cell) {
        return Err(MoveError::SquareOccupied(cell));
    }

    let mark = next_mover(board);
    let next = board
        .with_mark(cell, mark)
        .ok_or(MoveError::OffBoard(cell))?;
    debug!(cell, mark = %mark, "Mark placed");
    Ok(next)
}

/// Cells a move may target right now: empty ones, and none once a line is won.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    if winner(board).is_some() {
        return Vec::new();
    }
    Position::valid_moves(board)
}
