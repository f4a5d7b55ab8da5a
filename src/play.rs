//! Terminal rendering and the interactive play loop.

use derive_more::{Display, Error};
use persisted_store::ValueStore;
use persisted_tictactoe::{GameController, MoveOutcome, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <cell>      play a cell, 0-8 or a name like `center`
  jump <n>    go to step n of the history
  restart     start a new game
  board       show the board
  history     list the steps
  help        show this text
  quit        leave";

/// A line typed at the play prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Play a cell.
    Move(usize),
    /// Jump to a history step.
    Jump(usize),
    /// Start over.
    Restart,
    /// Print the board and status.
    Board,
    /// Print the history list.
    History,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
}

/// A prompt line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input: {}", input)]
pub struct ParseCommandError {
    /// The offending input.
    pub input: String,
}

impl std::str::FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseCommandError {
            input: s.to_string(),
        };
        let lower = s.to_lowercase();
        let mut words = lower.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("jump"), Some(step), None) => step.parse().map(PlayCommand::Jump).map_err(|_| err()),
            (Some("restart"), None, None) => Ok(PlayCommand::Restart),
            (Some("board"), None, None) => Ok(PlayCommand::Board),
            (Some("history"), None, None) => Ok(PlayCommand::History),
            (Some("help" | "?"), None, None) => Ok(PlayCommand::Help),
            (Some("quit" | "exit" | "q"), None, None) => Ok(PlayCommand::Quit),
            (Some(_), _, _) => Position::from_label_or_number(s)
                .map(|pos| PlayCommand::Move(pos.to_index()))
                .ok_or_else(err),
            (None, _, _) => Err(err()),
        }
    }
}

const GAME_OVER_HINT: &str = "Game over. Type `restart` or `jump <n>`.";

/// Board grid followed by the status line.
///
/// A finished board also gets a hint, since every further move is ignored.
#[instrument(skip(game))]
pub fn render_board<S>(game: &GameController<S>) -> String {
    let status = game.status();
    if status.is_over() {
        format!("{}\n\n{}\n{}", game.current_board(), status, GAME_OVER_HINT)
    } else {
        format!("{}\n\n{}", game.current_board(), status)
    }
}

/// The numbered history list, one step per line.
#[instrument(skip(game))]
pub fn render_history<S>(game: &GameController<S>) -> String {
    game.steps()
        .iter()
        .map(|step| format!("{}. {}", step.index, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Describes a move outcome for the user.
#[instrument]
pub fn describe_outcome(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Appended { step } => format!("Move #{} played.", step),
        MoveOutcome::Branched { step, discarded } => format!(
            "Move #{} played, {} later step(s) discarded.",
            step, discarded
        ),
        MoveOutcome::Ignored(e) => format!("Move ignored: {}.", e),
    }
}

/// Runs a single command against `game`, returning the text to show.
#[instrument(skip(game))]
pub fn execute<S: ValueStore>(game: &mut GameController<S>, command: PlayCommand) -> String {
    match command {
        PlayCommand::Move(cell) => {
            let outcome = game.apply_move(cell);
            format!("{}\n\n{}", describe_outcome(&outcome), render_board(game))
        }
        PlayCommand::Jump(step) => match game.jump_to(step) {
            Ok(()) => render_board(game),
            Err(e) => e.to_string(),
        },
        PlayCommand::Restart => {
            game.restart();
            render_board(game)
        }
        PlayCommand::Board => render_board(game),
        PlayCommand::History => render_history(game),
        PlayCommand::Help => HELP.to_string(),
        PlayCommand::Quit => String::new(),
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
#[instrument(skip_all)]
pub fn run<S, R, W>(game: &mut GameController<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: ValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}\n", render_board(game))?;
    writeln!(output, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<PlayCommand>() {
            Ok(PlayCommand::Quit) => break,
            Ok(command) => writeln!(output, "{}", execute(game, command))?,
            Err(e) => writeln!(output, "{}. Type `help` for commands.", e)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use persisted_store::MemoryStore;

    #[test]
    fn test_parse_commands() {
        assert_eq!("4".parse::<PlayCommand>(), Ok(PlayCommand::Move(4)));
        assert_eq!("Center".parse::<PlayCommand>(), Ok(PlayCommand::Move(4)));
        assert_eq!("top left".parse::<PlayCommand>(), Ok(PlayCommand::Move(0)));
        assert_eq!(" jump 3 ".parse::<PlayCommand>(), Ok(PlayCommand::Jump(3)));
        assert_eq!("RESTART".parse::<PlayCommand>(), Ok(PlayCommand::Restart));
        assert_eq!("q".parse::<PlayCommand>(), Ok(PlayCommand::Quit));
        assert!("jump".parse::<PlayCommand>().is_err());
        assert!("jump x".parse::<PlayCommand>().is_err());
        assert!("9".parse::<PlayCommand>().is_err());
        assert!("".parse::<PlayCommand>().is_err());
    }

    #[test]
    fn test_render_history_marks_current() {
        let mut game = GameController::new(MemoryStore::new());
        game.apply_move(4);
        assert_eq!(
            render_history(&game),
            "0. Go to Game Start\n1. Go to move #1 (current step)"
        );
    }

    #[test]
    fn test_render_board_hints_once_over() {
        let mut game = GameController::new(MemoryStore::new());
        assert!(!render_board(&game).contains(GAME_OVER_HINT));

        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell);
        }
        let text = render_board(&game);
        assert!(text.ends_with(&format!("Winner: X\n{}", GAME_OVER_HINT)));

        game.jump_to(4).unwrap();
        assert!(!render_board(&game).contains(GAME_OVER_HINT));
    }

    #[test]
    fn test_render_board_hints_on_draw() {
        let mut game = GameController::new(MemoryStore::new());
        for cell in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            game.apply_move(cell);
        }
        assert!(render_board(&game).ends_with(&format!("Draw\n{}", GAME_OVER_HINT)));
    }

    #[test]
    fn test_execute_reports_ignored_move() {
        let mut game = GameController::new(MemoryStore::new());
        execute(&mut game, PlayCommand::Move(0));
        let text = execute(&mut game, PlayCommand::Move(0));
        assert!(text.starts_with("Move ignored: Square 0 is already occupied."));
    }

    #[test]
    fn test_execute_bad_jump() {
        let mut game = GameController::new(MemoryStore::new());
        let text = execute(&mut game, PlayCommand::Jump(5));
        assert_eq!(text, "Step 5 is out of range (history has 1 entries)");
    }

    #[test]
    fn test_run_plays_until_quit() {
        let mut game = GameController::new(MemoryStore::new());
        let input = b"0\n3\n1\n4\n2\nhistory\nquit\n8\n";
        let mut output = Vec::new();
        run(&mut game, &input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Winner: X"));
        assert!(text.contains("5. Go to move #5 (current step)"));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_run_reports_garbage() {
        let mut game = GameController::new(MemoryStore::new());
        let mut output = Vec::new();
        run(&mut game, &b"dance\n"[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Unrecognized input: dance"));
    }
}
