//! Persisted Games library
//!
//! Two small stateful components whose state outlives the process through
//! an injected key-value store.
//!
//! # Architecture
//!
//! - **Store**: [`ValueStore`] capability with memory and JSON-file backends
//!   (re-exported from `persisted_store`)
//! - **Tic-tac-toe**: pure engine plus a time-travelling [`GameController`]
//!   (re-exported from `persisted_tictactoe`)
//! - **Greeting**: a remembered name field ([`Greeting`])
//! - **Front end**: configuration, CLI, and an interactive play loop
//!
//! # Example
//!
//! ```
//! use persisted_games::{GameController, Greeting, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//!
//! let mut greeting = Greeting::new(&mut store, "");
//! greeting.set_name("Ada");
//! assert_eq!(greeting.message(), "Hello Ada");
//!
//! let mut game = GameController::new(&mut store);
//! game.apply_move(4);
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod greeting;
mod play;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Greeting
pub use greeting::{Greeting, USER_KEY, User};

// Crate-level exports - Interactive play
pub use play::{
    ParseCommandError, PlayCommand, describe_outcome, execute, render_board, render_history, run,
};

// Crate-level exports - Store
pub use persisted_store::{FileStore, LoadSource, MemoryStore, Persisted, StoreError, ValueStore};

// Crate-level exports - Game types (tic-tac-toe)
pub use persisted_tictactoe::{
    Board, GameController, GameStatus, History, HistoryError, Mark, MoveError, MoveOutcome,
    Position, Square, Step, StoreKeys,
};
