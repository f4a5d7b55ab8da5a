//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

/// A square on the tic-tac-toe board.
///
/// Serialized as a nullable mark: `null` for empty, `"X"` or `"O"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Square {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Mark> {
    fn from(square: Square) -> Self {
        square.mark()
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board and leaves the
/// original untouched. Serialized as an array of exactly nine nullable marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell (0-8).
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns a copy of this board with `mark` placed at `cell`.
    ///
    /// Returns `None` if `cell` is off the board. Occupancy is not checked;
    /// use [`crate::apply_move`] for rule-checked moves.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Option<Self> {
        if cell >= Self::CELLS {
            return None;
        }
        let mut next = *self;
        next.squares[cell] = Square::Occupied(mark);
        Some(next)
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells shown as their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells written as `X`, `O`, or one of `.`/`_`/`-` for empty.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => {
                    return Err(ParseBoardError(format!("unexpected character '{}'", other)));
                }
            };
            if count == Self::CELLS {
                return Err(ParseBoardError("more than 9 cells".to_string()));
            }
            squares[count] = square;
            count += 1;
        }

        if count != Self::CELLS {
            return Err(ParseBoardError(format!("expected 9 cells, found {}", count)));
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
        assert!(board.with_mark(9, Mark::X).is_none());
    }

    #[test]
    fn test_serializes_as_nullable_marks() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X",null,null,null,"O",null,null,null,null]"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_rejects_wrong_length_json() {
        let result: Result<Board, _> = serde_json::from_str(r#"[null,null,"X"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
        assert!("XOXOZOXOX".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X|O|.  ...  ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
