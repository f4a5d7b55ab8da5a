//! Tests for game and greeting state persisted to a store file.

use persisted_games::{
    AppConfig, FileStore, GameController, Greeting, Mark, MoveOutcome, StoreKeys, ValueStore,
    render_history,
};
use tempfile::TempDir;

/// Creates a temporary directory with a store path inside it. The directory
/// handle must stay in scope to keep the file alive.
fn setup_store() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    (dir, path)
}

#[test]
fn test_game_resumes_across_processes() {
    let (_dir, path) = setup_store();

    let mut game = GameController::new(FileStore::new(&path));
    for cell in [4, 0, 8] {
        assert!(game.apply_move(cell).is_applied());
    }
    drop(game);

    let mut game = GameController::new(FileStore::new(&path));
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.cursor(), 3);
    assert_eq!(game.next_mover(), Mark::O);

    game.jump_to(1).expect("in range");
    drop(game);

    let game = GameController::new(FileStore::new(&path));
    assert_eq!(game.cursor(), 1);
    assert_eq!(
        render_history(&game),
        "0. Go to Game Start\n1. Go to move #1 (current step)\n2. Go to move #2\n3. Go to move #3"
    );
}

#[test]
fn test_branch_is_persisted() {
    let (_dir, path) = setup_store();

    let mut game = GameController::new(FileStore::new(&path));
    for cell in [0, 1, 2, 3] {
        game.apply_move(cell);
    }
    game.jump_to(1).expect("in range");
    assert_eq!(
        game.apply_move(8),
        MoveOutcome::Branched { step: 2, discarded: 3 }
    );
    drop(game);

    let game = GameController::new(FileStore::new(&path));
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.cursor(), 2);
}

#[test]
fn test_history_format_on_disk() {
    let (_dir, path) = setup_store();

    let mut game = GameController::new(FileStore::new(&path));
    game.apply_move(0);
    drop(game);

    let store = FileStore::new(&path);
    let raw = store
        .load("tic-tac-toe:history")
        .expect("load failed")
        .expect("history stored");
    let parsed: Vec<Vec<Option<String>>> = serde_json::from_str(&raw).expect("array of arrays");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1][0].as_deref(), Some("X"));
    assert!(parsed[1][1..].iter().all(Option::is_none));
    assert_eq!(store.load("currentStep").expect("load failed").as_deref(), Some("1"));
}

#[test]
fn test_greeting_and_game_share_a_store() {
    let (_dir, path) = setup_store();

    let mut greeting = Greeting::new(FileStore::new(&path), "");
    assert_eq!(greeting.message(), "Please type your name");
    greeting.set_name("Ada");

    let mut game = GameController::new(FileStore::new(&path));
    game.apply_move(4);

    let greeting = Greeting::new(FileStore::new(&path), "someone else");
    assert_eq!(greeting.message(), "Hello Ada");
    let game = GameController::new(FileStore::new(&path));
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_config_keys_isolate_games() {
    let (_dir, path) = setup_store();
    let first = AppConfig::default()
        .with_history_key("a:history")
        .with_cursor_key("a:step");
    let second = StoreKeys::new("b:history", "b:step");

    let mut game = GameController::with_keys(FileStore::new(&path), first.store_keys());
    game.apply_move(4);

    let other = GameController::with_keys(FileStore::new(&path), second);
    assert_eq!(other.history().len(), 1);
}

#[test]
fn test_corrupt_store_file_starts_fresh() {
    let (_dir, path) = setup_store();
    std::fs::write(&path, "garbage").expect("write failed");

    let mut game = GameController::new(FileStore::new(&path));
    assert_eq!(game.history().len(), 1);

    // Saving over an unreadable file fails, but play continues in memory.
    assert!(game.apply_move(4).is_applied());
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_greeting_keeps_name_when_store_file_is_corrupt() {
    let (_dir, path) = setup_store();
    std::fs::write(&path, "garbage").expect("write failed");

    let mut greeting = Greeting::new(FileStore::new(&path), "Ada");
    assert_eq!(greeting.message(), "Hello Ada");

    greeting.set_name("Grace");
    assert_eq!(greeting.message(), "Hello Grace");

    // The unreadable file is left as it was.
    let on_disk = std::fs::read_to_string(&path).expect("read failed");
    assert_eq!(on_disk, "garbage");
}
