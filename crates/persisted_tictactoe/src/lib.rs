//! Tic-tac-toe with a persisted, time-travelling history.
//!
//! # Architecture
//!
//! - **Engine**: pure functions over an immutable [`Board`] ([`apply_move`],
//!   [`status`], and the [`rules`] module). No state between calls.
//! - **History**: validated, linear sequence of boards ([`History`]).
//! - **Controller**: [`GameController`] owns the history and a cursor into
//!   it, supports jumping to any earlier step, and writes every change to an
//!   injected [`ValueStore`](persisted_store::ValueStore).
//!
//! # Example
//!
//! ```
//! use persisted_store::MemoryStore;
//! use persisted_tictactoe::{GameController, MoveOutcome};
//!
//! let mut game = GameController::new(MemoryStore::new());
//! assert_eq!(game.apply_move(4), MoveOutcome::Appended { step: 1 });
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! // Occupied cells are ignored.
//! assert!(!game.apply_move(4).is_applied());
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod engine;
mod error;
mod history;
mod position;
pub mod rules;
mod types;

pub use controller::{CURSOR_KEY, GameController, HISTORY_KEY, MoveOutcome, Step, StoreKeys};
pub use engine::{GameStatus, apply_move, legal_moves, status};
pub use error::{HistoryError, MoveError, ParseBoardError};
pub use history::History;
pub use position::Position;
pub use rules::{next_mover, winner};
pub use types::{Board, Mark, Square};
