//! Command-line interface for persisted_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Persisted Games - a remembered name field and time-travelling tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "persisted_games")]
#[command(about = "Tic-tac-toe with time travel and a persisted greeting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store file, overriding the config
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the board, status and history
    Board,

    /// Play a cell on the current board
    Move {
        /// Cell index 0-8 or a position name such as `center`
        cell: String,
    },

    /// Jump to a step of the history
    Jump {
        /// History step (0 is the game start)
        step: usize,
    },

    /// Start a new game
    Restart,

    /// Play interactively on stdin
    Play,

    /// Show the greeting, optionally setting the remembered name
    Greet {
        /// New name to remember
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_with_store() {
        let cli = Cli::parse_from(["persisted_games", "--store", "s.json", "move", "center"]);
        assert_eq!(cli.store, Some(PathBuf::from("s.json")));
        assert_eq!(
            cli.command,
            Command::Move {
                cell: "center".to_string()
            }
        );
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["persisted_games", "jump", "2", "--config", "c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.command, Command::Jump { step: 2 });
    }

    #[test]
    fn test_greet_without_name() {
        let cli = Cli::parse_from(["persisted_games", "greet"]);
        assert_eq!(cli.command, Command::Greet { name: None });
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
