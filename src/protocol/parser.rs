//! Line command parser.
//!
//! Turns one line of shell input into a structured [`Command`] that the
//! main loop dispatches on.

use tracing::warn;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game: `newgame <rows> <cols> [base_size]`.
    NewGame { rows: usize, cols: usize, base_size: Option<u8> },

    /// Stage a move for the player to move: `move <intent>`.
    Move { intent: String },

    /// Commit the staged move.
    Confirm,

    /// Drop the staged move.
    Discard,

    /// Step the playback cursor back one board.
    Back,

    /// Step the playback cursor forward one board.
    Forward,

    /// Return from playback to the latest board.
    Live,

    /// Print the board under the cursor and whose turn it is.
    Show,

    /// Print the confirmed move log.
    History,

    /// List the Vanquish corners open to the player to move.
    Corners,

    /// Write the game record to a file.
    Save { path: String },

    /// Replace the game with one read from a file.
    Load { path: String },

    /// Leave the shell.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for blank lines and unknown commands. Malformed arguments
/// for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "confirm" => Some(Command::Confirm),
        "discard" => Some(Command::Discard),
        "back" => Some(Command::Back),
        "forward" => Some(Command::Forward),
        "live" => Some(Command::Live),
        "show" => Some(Command::Show),
        "history" => Some(Command::History),
        "corners" => Some(Command::Corners),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(args),
        "move" => parse_move_command(trimmed),
        "save" => parse_path(args).map(|path| Command::Save { path }),
        "load" => parse_path(args).map(|path| Command::Load { path }),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `newgame <rows> <cols> [base_size]`.
fn parse_newgame(args: &[&str]) -> Option<Command> {
    if !(2..=3).contains(&args.len()) {
        warn!("malformed newgame: expected 'newgame <rows> <cols> [base_size]'");
        return None;
    }
    let number = |s: &str| match s.parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(value = s, "invalid newgame dimension");
            None
        }
    };
    let rows = number(args[0])?;
    let cols = number(args[1])?;
    let base_size = match args.get(2) {
        Some(s) => match s.parse::<u8>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(value = *s, "invalid newgame base size");
                return None;
            }
        },
        None => None,
    };
    Some(Command::NewGame { rows, cols, base_size })
}

/// Parses `move <intent>`, keeping everything after `move` as the intent.
fn parse_move_command(line: &str) -> Option<Command> {
    let intent = line.strip_prefix("move").unwrap_or_default().trim();
    if intent.is_empty() {
        warn!("malformed move: expected 'move <intent>'");
        return None;
    }
    Some(Command::Move { intent: intent.to_string() })
}

fn parse_path(args: &[&str]) -> Option<String> {
    match args {
        [path] => Some((*path).to_string()),
        _ => {
            warn!("malformed command: expected a single path");
            None
        }
    }
}
