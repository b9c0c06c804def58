//! Collaborator contracts consumed by the session.
//!
//! The session never draws anything itself. It pushes full board snapshots
//! and turn changes to a [`Renderer`], and reports the end of the game to a
//! [`GameHost`]. Both are implemented for `()` as no-ops.

use crate::board::{Board, Player};

/// Receives board snapshots and turn updates.
pub trait Renderer {
    /// Redraws every cell from `board`.
    fn set_view(&mut self, board: &Board);

    /// Shows whose turn it is. With `win` set, `player` has won and move
    /// input should be disabled.
    fn set_player(&mut self, player: Player, win: bool);
}

/// Receives game-level notifications.
pub trait GameHost {
    /// Called once, synchronously, when a Conquest is confirmed.
    fn game_won(&mut self, winner: Player);
}

impl Renderer for () {
    fn set_view(&mut self, _board: &Board) {}

    fn set_player(&mut self, _player: Player, _win: bool) {}
}

impl GameHost for () {
    fn game_won(&mut self, _winner: Player) {}
}

/// A renderer and host that records every call, for inspection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    pub views: Vec<Board>,
    pub players: Vec<(Player, bool)>,
    pub wins: Vec<Player>,
}

impl Recorder {
    /// The most recently rendered board.
    pub fn last_view(&self) -> Option<&Board> {
        self.views.last()
    }

    /// The most recent turn indicator update.
    pub fn last_player(&self) -> Option<(Player, bool)> {
        self.players.last().copied()
    }
}

impl Renderer for Recorder {
    fn set_view(&mut self, board: &Board) {
        self.views.push(board.clone());
    }

    fn set_player(&mut self, player: Player, win: bool) {
        self.players.push((player, win));
    }
}

impl GameHost for Recorder {
    fn game_won(&mut self, winner: Player) {
        self.wins.push(winner);
    }
}
