//! Persisted Games - CLI
//!
//! Every command opens the configured store, performs one operation, and
//! leaves the updated state behind for the next invocation.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use persisted_games::{
    AppConfig, Cli, Command, FileStore, GameController, Greeting, Position, describe_outcome,
    render_board, render_history,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| config.store_path().clone());
    info!(store = %store_path.display(), command = ?cli.command, "Starting");
    let store = FileStore::new(&store_path);

    match cli.command {
        Command::Greet { name } => run_greet(store, &config, name.as_deref()),
        Command::Board => {
            let game = open_game(store, &config);
            println!("{}\n\n{}", render_board(&game), render_history(&game));
            Ok(())
        }
        Command::Move { cell } => run_move(open_game(store, &config), &cell),
        Command::Jump { step } => {
            let mut game = open_game(store, &config);
            game.jump_to(step)?;
            println!("{}", render_board(&game));
            Ok(())
        }
        Command::Restart => {
            let mut game = open_game(store, &config);
            game.restart();
            println!("{}", render_board(&game));
            Ok(())
        }
        Command::Play => {
            let mut game = open_game(store, &config);
            let stdin = std::io::stdin();
            persisted_games::run(&mut game, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
    }
}

/// Restores the stored game under the configured keys.
fn open_game(store: FileStore, config: &AppConfig) -> GameController<FileStore> {
    GameController::with_keys(store, config.store_keys())
}

/// Show or update the remembered name.
#[instrument(skip(store, config))]
fn run_greet(store: FileStore, config: &AppConfig, name: Option<&str>) -> Result<()> {
    let mut greeting = Greeting::with_key(store, config.user_key(), "");
    if let Some(name) = name {
        greeting.set_name(name);
    }
    println!("{}", greeting.message());
    Ok(())
}

/// Play a cell given as an index or a position name.
#[instrument(skip(game))]
fn run_move(mut game: GameController<FileStore>, cell: &str) -> Result<()> {
    let position = Position::from_label_or_number(cell)
        .with_context(|| format!("'{}' is not a board cell (0-8 or a name like center)", cell))?;
    let outcome = game.apply_move(position.to_index());
    debug!(?outcome, "Move handled");
    println!("{}\n\n{}", describe_outcome(&outcome), render_board(&game));
    Ok(())
}
