//! Live game session.
//!
//! A [`Session`] coordinates one game: it owns the [`History`], the
//! timeline of confirmed boards, the move currently staged for confirmation,
//! and a playback cursor. It is the only component that talks to the
//! renderer and the host.
//!
//! The session is always in exactly one [`Mode`]:
//!
//! - `Live`: the cursor sits on the latest confirmed board and the active
//!   player may stage a move with [`Session::receive`].
//! - `Staged`: a validated move has been applied to a working board. It can
//!   be confirmed or discarded; further moves and playback are ignored.
//! - `Browsing`: the cursor has been moved back over the confirmed timeline.
//!   Boards are shown read-only until the cursor returns to the end.
//!
//! The player to move is a function of the cursor alone: player one moves
//! on even-numbered boards, player two on odd-numbered ones.

pub mod view;

use tracing::{debug, info, instrument};

use crate::board::{Board, BoardConfig, Move, Player};
use crate::history::{History, RecordError};
use crate::rules::InvalidMove;

pub use view::{GameHost, Recorder, Renderer};

/// Maximum number of cells in one Acquire unless configured otherwise.
pub const DEFAULT_ACQUIRE_LIMIT: usize = 3;

/// The session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// At the latest confirmed board with nothing staged.
    Live,
    /// A validated move applied to a working copy, awaiting confirmation.
    Staged { mv: Move, board: Board },
    /// Viewing an earlier confirmed board; `cursor` is its index.
    Browsing { cursor: usize },
}

/// One game in progress.
pub struct Session<R: Renderer = (), H: GameHost = ()> {
    history: History,
    /// Confirmed boards: index 0 is the starting board, index i the board
    /// after i confirmed moves.
    save: Vec<Board>,
    mode: Mode,
    acquire_limit: usize,
    renderer: R,
    host: H,
}

impl<R: Renderer, H: GameHost> Session<R, H> {
    /// Starts a fresh game.
    pub fn new_game(config: BoardConfig, renderer: R, host: H) -> Self {
        let history = History::new(config);
        let save = vec![history.initial_board()];
        Self::assemble(history, save, renderer, host)
    }

    /// Resumes a recorded game by replaying its history once.
    pub fn from_history(history: History, renderer: R, host: H) -> Result<Self, RecordError> {
        let save = history.board_history()?;
        Ok(Self::assemble(history, save, renderer, host))
    }

    fn assemble(history: History, save: Vec<Board>, renderer: R, host: H) -> Self {
        let mut session = Session {
            history,
            save,
            mode: Mode::Live,
            acquire_limit: DEFAULT_ACQUIRE_LIMIT,
            renderer,
            host,
        };
        session.render();
        session
    }

    /// Sets the maximum number of cells one Acquire may claim.
    pub fn with_acquire_limit(mut self, limit: usize) -> Self {
        self.acquire_limit = limit;
        self
    }

    pub fn acquire_limit(&self) -> usize {
        self.acquire_limit
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The confirmed timeline.
    pub fn saved(&self) -> &[Board] {
        &self.save
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The staged move, if any.
    pub fn staged(&self) -> Option<&Move> {
        match &self.mode {
            Mode::Staged { mv, .. } => Some(mv),
            _ => None,
        }
    }

    /// The latest confirmed board.
    pub fn confirmed(&self) -> &Board {
        let last = self.last_index();
        &self.save[last]
    }

    /// The working board: the staged result if a move is staged, otherwise
    /// the latest confirmed board.
    pub fn latest(&self) -> &Board {
        match &self.mode {
            Mode::Staged { board, .. } => board,
            _ => self.confirmed(),
        }
    }

    /// The confirmed board under the playback cursor.
    pub fn viewed(&self) -> &Board {
        &self.save[self.cursor()]
    }

    /// Index into the confirmed timeline of the board being shown.
    pub fn cursor(&self) -> usize {
        match self.mode {
            Mode::Browsing { cursor } => cursor,
            _ => self.last_index(),
        }
    }

    fn last_index(&self) -> usize {
        self.save.len() - 1
    }

    /// The player to move at the cursor.
    pub fn current_player(&self) -> Player {
        if self.cursor() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn is_finished(&self) -> bool {
        self.history.is_finished()
    }

    pub fn winner(&self) -> Option<Player> {
        self.history.winner()
    }

    /// Validates `mv` against the latest confirmed board and stages it.
    ///
    /// Returns `Ok(false)` without doing anything when a move is already
    /// staged, the cursor is browsing, or the game is over. On rejection
    /// the session is unchanged and the error is returned.
    #[instrument(skip(self), fields(cursor = self.cursor()))]
    pub fn receive(&mut self, mv: Move) -> Result<bool, InvalidMove> {
        if self.is_finished() || self.mode != Mode::Live {
            debug!("move ignored");
            return Ok(false);
        }
        let expected = self.current_player();
        if mv.player() != expected {
            return Err(InvalidMove::WrongPlayer { expected, found: mv.player() });
        }
        if let Move::Acquire { locs, .. } = &mv {
            if locs.len() > self.acquire_limit {
                return Err(InvalidMove::TooManyCells { count: locs.len(), limit: self.acquire_limit });
            }
        }

        let board = mv.apply(self.confirmed(), true)?;
        self.renderer.set_view(&board);
        self.mode = Mode::Staged { mv, board };
        debug!("move staged");
        Ok(true)
    }

    /// Drops the staged move and shows the latest confirmed board again.
    /// Returns false if nothing was staged.
    pub fn discard_change(&mut self) -> bool {
        if !matches!(self.mode, Mode::Staged { .. }) {
            return false;
        }
        self.mode = Mode::Live;
        let board = &self.save[self.save.len() - 1];
        self.renderer.set_view(board);
        debug!("staged move discarded");
        true
    }

    /// Commits the staged move to the history and the timeline and passes
    /// the turn. A confirmed Conquest ends the game and notifies the host.
    /// Returns false if nothing was staged.
    #[instrument(skip(self))]
    pub fn confirm(&mut self) -> bool {
        let (mv, board) = match std::mem::replace(&mut self.mode, Mode::Live) {
            Mode::Staged { mv, board } => (mv, board),
            other => {
                self.mode = other;
                return false;
            }
        };

        let mover = mv.player();
        let won = mv.is_conquest();
        self.save.push(board);
        self.history.store(mv);
        info!(player = %mover, moves = self.history.len(), "move confirmed");

        if won {
            info!(winner = %mover, "game won");
            self.renderer.set_player(mover, true);
            self.host.game_won(mover);
        } else {
            let next = self.current_player();
            self.renderer.set_player(next, false);
        }
        true
    }

    /// Moves the playback cursor one board back. Ignored while a move is
    /// staged or at the first board.
    pub fn play_back(&mut self) -> bool {
        if matches!(self.mode, Mode::Staged { .. }) {
            return false;
        }
        let cursor = self.cursor();
        if cursor == 0 {
            return false;
        }
        self.move_cursor(cursor - 1);
        true
    }

    /// Moves the playback cursor one board forward. Reaching the latest
    /// board returns the session to live play.
    pub fn play_forward(&mut self) -> bool {
        match self.mode {
            Mode::Browsing { cursor } => {
                self.move_cursor(cursor + 1);
                true
            }
            _ => false,
        }
    }

    /// Jumps from browsing straight back to the latest confirmed board.
    pub fn resume(&mut self) -> bool {
        if !matches!(self.mode, Mode::Browsing { .. }) {
            return false;
        }
        self.move_cursor(self.last_index());
        true
    }

    pub fn at_first_state(&self) -> bool {
        self.cursor() == 0
    }

    /// True at the latest confirmed board. When `finish_allowed` is false,
    /// the final board of a finished game does not count, so playback
    /// controls can tell "caught up with live play" from "reached the end".
    pub fn at_last_state(&self, finish_allowed: bool) -> bool {
        self.cursor() == self.last_index() && (finish_allowed || !self.is_finished())
    }

    fn move_cursor(&mut self, cursor: usize) {
        let cursor = cursor.min(self.last_index());
        self.mode = if cursor == self.last_index() { Mode::Live } else { Mode::Browsing { cursor } };
        debug!(cursor, "cursor moved");
        self.render();
    }

    /// Pushes the board under the cursor and the turn indicator.
    fn render(&mut self) {
        let cursor = self.cursor();
        let at_end = cursor == self.last_index();
        self.renderer.set_view(&self.save[cursor]);
        match self.winner() {
            Some(winner) if at_end => self.renderer.set_player(winner, true),
            _ => {
                let player = self.current_player();
                self.renderer.set_player(player, false);
            }
        }
    }
}
