//! Turn order, derived from the board alone.

use crate::{Board, Mark};
use tracing::instrument;

/// Returns the mark that moves next on `board`.
///
/// X moves whenever both marks have been placed equally often, O otherwise.
/// The turn is never stored, so any snapshot yields its own next mover.
#[instrument(skip(board))]
pub fn next_mover(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(next_mover(&Board::new()), Mark::X);
    }

    #[test]
    fn test_o_after_single_x() {
        let board: Board = "... .X. ...".parse().unwrap();
        assert_eq!(next_mover(&board), Mark::O);
    }

    #[test]
    fn test_x_after_pair() {
        let board: Board = "O.. .X. ...".parse().unwrap();
        assert_eq!(next_mover(&board), Mark::X);
    }
}
