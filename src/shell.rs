//! Line-protocol shell.
//!
//! Owns one [`Session`] and answers parsed [`Command`](crate::protocol::Command)s with text lines.
//! Board snapshots and turn changes pushed by the session are queued in a
//! [`Transcript`] and written out after each command, so the order of
//! output always follows the order of the session's notifications.

use std::fs;
use std::io::{self, Write};

use tracing::{info, warn};

use crate::board::{Board, BoardConfig, Player};
use crate::history::{History, RecordError};
use crate::movegen::vanquish_corners;
use crate::protocol::grid::encode_rows;
use crate::protocol::notation::{format_move, parse_intent};
use crate::session::{GameHost, Renderer, Session, DEFAULT_ACQUIRE_LIMIT};

/// Queues the session's render and host notifications as output lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Removes and returns every queued line.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Renderer for Transcript {
    fn set_view(&mut self, board: &Board) {
        self.lines.push("board".to_string());
        self.lines.extend(encode_rows(board));
    }

    fn set_player(&mut self, player: Player, win: bool) {
        let tag = if win { "winner" } else { "turn" };
        self.lines.push(format!("{} {}", tag, player));
    }
}

impl GameHost for Transcript {
    fn game_won(&mut self, _winner: Player) {
        self.lines.push("gameover".to_string());
    }
}

/// Holds the game being played between commands.
pub struct Shell {
    session: Session<Transcript, Transcript>,
    acquire_limit: usize,
}

impl Shell {
    /// Starts a shell on a fresh game.
    pub fn new(config: BoardConfig, acquire_limit: usize) -> Self {
        let session = Session::new_game(config, Transcript::default(), Transcript::default())
            .with_acquire_limit(acquire_limit);
        Shell { session, acquire_limit }
    }

    /// Starts a shell on a recorded game.
    pub fn from_history(history: History, acquire_limit: usize) -> Result<Self, RecordError> {
        let session = Session::from_history(history, Transcript::default(), Transcript::default())?
            .with_acquire_limit(acquire_limit);
        Ok(Shell { session, acquire_limit })
    }

    pub fn session(&self) -> &Session<Transcript, Transcript> {
        &self.session
    }

    /// Writes every queued notification, renderer lines first.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let rendered = self.session.renderer_mut().take();
        let hosted = self.session.host_mut().take();
        for line in rendered.into_iter().chain(hosted) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Handles `newgame`. Without a base size, odd row counts get ring
    /// bases and even ones get block bases.
    pub fn handle_newgame<W: Write>(
        &mut self,
        rows: usize,
        cols: usize,
        base_size: Option<u8>,
        out: &mut W,
    ) -> io::Result<()> {
        let config = match base_size {
            Some(size) => BoardConfig::new(rows, cols, size),
            None => BoardConfig::with_default_base(rows, cols),
        };
        match config {
            Ok(config) => {
                info!(rows, cols, base_size = config.base_size, "new game");
                *self = Shell::new(config, self.acquire_limit);
                self.flush(out)
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    /// Handles `move <intent>` on behalf of the player to move.
    pub fn handle_move<W: Write>(&mut self, intent: &str, out: &mut W) -> io::Result<()> {
        let mv = match parse_intent(self.session.current_player(), intent) {
            Ok(mv) => mv,
            Err(e) => return writeln!(out, "invalid {}", e),
        };
        let notation = format_move(&mv);
        match self.session.receive(mv) {
            Ok(true) => {
                self.flush(out)?;
                writeln!(out, "staged {}", notation)
            }
            Ok(false) => writeln!(out, "ignored"),
            Err(e) => {
                warn!(error = %e, notation = %notation, "move rejected");
                writeln!(out, "invalid {}", e)
            }
        }
    }

    pub fn handle_confirm<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let done = self.session.confirm();
        self.respond(done, out)
    }

    pub fn handle_discard<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let done = self.session.discard_change();
        self.respond(done, out)
    }

    pub fn handle_back<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let done = self.session.play_back();
        self.respond(done, out)
    }

    pub fn handle_forward<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let done = self.session.play_forward();
        self.respond(done, out)
    }

    pub fn handle_live<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let done = self.session.resume();
        self.respond(done, out)
    }

    /// Prints the board under the cursor and the turn indicator. While a
    /// move is staged the staged board is shown.
    pub fn handle_show<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let board = if self.session.staged().is_some() {
            self.session.latest()
        } else {
            self.session.viewed()
        };
        writeln!(out, "board")?;
        for row in encode_rows(board) {
            writeln!(out, "{}", row)?;
        }
        match self.session.winner() {
            Some(winner) if self.session.at_last_state(true) => writeln!(out, "winner {}", winner),
            _ => writeln!(out, "turn {}", self.session.current_player()),
        }
    }

    /// Prints the confirmed move log.
    pub fn handle_history<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let moves = self.session.history().moves();
        writeln!(out, "moves {}", moves.len())?;
        for mv in moves {
            writeln!(out, "{}", format_move(mv))?;
        }
        Ok(())
    }

    /// Lists every corner where the player to move could Vanquish.
    pub fn handle_corners<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let corners = vanquish_corners(self.session.confirmed(), self.session.current_player());
        let mut line = String::from("corners");
        for corner in corners {
            line.push(' ');
            line.push_str(&corner.to_string());
        }
        writeln!(out, "{}", line)
    }

    pub fn handle_save<W: Write>(&mut self, path: &str, out: &mut W) -> io::Result<()> {
        let saved = self
            .session
            .history()
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
        match saved {
            Ok(()) => {
                info!(path, moves = self.session.history().len(), "game saved");
                writeln!(out, "saved {}", path)
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    pub fn handle_load<W: Write>(&mut self, path: &str, out: &mut W) -> io::Result<()> {
        let loaded = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| History::from_json(&json).map_err(|e| e.to_string()))
            .and_then(|history| Shell::from_history(history, self.acquire_limit).map_err(|e| e.to_string()));
        match loaded {
            Ok(shell) => {
                info!(path, moves = shell.session.history().len(), "game loaded");
                *self = shell;
                self.flush(out)
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn respond<W: Write>(&mut self, done: bool, out: &mut W) -> io::Result<()> {
        if done {
            self.flush(out)
        } else {
            writeln!(out, "ignored")
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(BoardConfig::default(), DEFAULT_ACQUIRE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        let mut shell = Shell::new(BoardConfig::new(3, 14, 2).unwrap(), DEFAULT_ACQUIRE_LIMIT);
        shell.flush(&mut Vec::new()).unwrap();
        shell
    }

    fn run(shell: &mut Shell, f: impl FnOnce(&mut Shell, &mut Vec<u8>) -> io::Result<()>) -> Vec<String> {
        let mut out = Vec::new();
        f(shell, &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn initial_render_is_queued() {
        let mut shell = Shell::new(BoardConfig::new(3, 14, 2).unwrap(), 3);
        let lines = run(&mut shell, |s, out| s.flush(out));
        assert_eq!(lines, vec!["board", "....XX..OO....", "....XX..OO....", "..............", "turn 1"]);
    }

    #[test]
    fn move_then_confirm() {
        let mut shell = shell();
        let lines = run(&mut shell, |s, out| s.handle_move("A 2,0 2,1", out));
        assert_eq!(
            lines,
            vec!["board", "....XX..OO....", "....XX..OO....", "xx............", "staged 1A 2,0 2,1"]
        );
        assert_eq!(run(&mut shell, |s, out| s.handle_confirm(out)), vec!["turn 2"]);
        assert_eq!(run(&mut shell, |s, out| s.handle_confirm(out)), vec!["ignored"]);
    }

    #[test]
    fn bad_moves_are_reported() {
        let mut shell = shell();
        let lines = run(&mut shell, |s, out| s.handle_move("Z", out));
        assert_eq!(lines, vec!["invalid unknown move kind 'Z'"]);
        let lines = run(&mut shell, |s, out| s.handle_move("A 0,4", out));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("invalid "));
        assert_eq!(shell.session().history().len(), 0);
    }

    #[test]
    fn second_move_is_ignored_while_staged() {
        let mut shell = shell();
        run(&mut shell, |s, out| s.handle_move("C", out));
        assert_eq!(run(&mut shell, |s, out| s.handle_move("A 2,2", out)), vec!["ignored"]);
        let lines = run(&mut shell, |s, out| s.handle_discard(out));
        assert_eq!(lines[0], "board");
        assert_eq!(run(&mut shell, |s, out| s.handle_discard(out)), vec!["ignored"]);
    }

    #[test]
    fn conquest_reports_winner_then_gameover() {
        let mut shell = shell();
        run(&mut shell, |s, out| s.handle_move("A 0,6 0,7", out));
        run(&mut shell, |s, out| s.handle_confirm(out));
        run(&mut shell, |s, out| s.handle_move("A 2,13", out));
        run(&mut shell, |s, out| s.handle_confirm(out));
        let lines = run(&mut shell, |s, out| s.handle_move("Q", out));
        assert_eq!(lines[1], "....XXXXOO....");
        assert_eq!(lines.last().map(String::as_str), Some("staged 1Q"));
        assert_eq!(run(&mut shell, |s, out| s.handle_confirm(out)), vec!["winner 1", "gameover"]);
        assert_eq!(run(&mut shell, |s, out| s.handle_move("C", out)), vec!["ignored"]);
        assert_eq!(run(&mut shell, |s, out| s.handle_show(out)).last().map(String::as_str), Some("winner 1"));
    }

    #[test]
    fn playback_and_history() {
        let mut shell = shell();
        run(&mut shell, |s, out| s.handle_move("A 2,0", out));
        run(&mut shell, |s, out| s.handle_confirm(out));
        run(&mut shell, |s, out| s.handle_move("A 2,13", out));
        run(&mut shell, |s, out| s.handle_confirm(out));

        assert_eq!(run(&mut shell, |s, out| s.handle_forward(out)), vec!["ignored"]);
        let lines = run(&mut shell, |s, out| s.handle_back(out));
        assert_eq!(lines, vec!["board", "....XX..OO....", "....XX..OO....", "x.............", "turn 2"]);
        assert_eq!(run(&mut shell, |s, out| s.handle_move("C", out)), vec!["ignored"]);
        let lines = run(&mut shell, |s, out| s.handle_live(out));
        assert_eq!(lines.last().map(String::as_str), Some("turn 1"));

        let lines = run(&mut shell, |s, out| s.handle_history(out));
        assert_eq!(lines, vec!["moves 2", "1A 2,0", "2A 2,13"]);
    }

    #[test]
    fn newgame_rejects_bad_config() {
        let mut shell = shell();
        let lines = run(&mut shell, |s, out| s.handle_newgame(2, 30, None, out));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("error "));

        let lines = run(&mut shell, |s, out| s.handle_newgame(15, 30, None, out));
        assert_eq!(lines.len(), 17);
        assert_eq!(shell.session().history().config().base_size, 3);
    }

    #[test]
    fn corners_lists_nothing_on_an_empty_board() {
        let mut shell = shell();
        assert_eq!(run(&mut shell, |s, out| s.handle_corners(out)), vec!["corners"]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("conquid-shell-{}.json", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let mut shell = shell();
        run(&mut shell, |s, out| s.handle_move("A 2,0 2,1", out));
        run(&mut shell, |s, out| s.handle_confirm(out));
        assert_eq!(run(&mut shell, |s, out| s.handle_save(&path, out)), vec![format!("saved {}", path)]);

        let mut other = Shell::default();
        let lines = run(&mut other, |s, out| s.handle_load(&path, out));
        assert_eq!(lines.last().map(String::as_str), Some("turn 2"));
        assert_eq!(other.session().history(), shell.session().history());
        assert_eq!(other.session().saved(), shell.session().saved());

        let _ = fs::remove_file(&path);
        let lines = run(&mut other, |s, out| s.handle_load(&path, out));
        assert!(lines[0].starts_with("error "));
    }
}
