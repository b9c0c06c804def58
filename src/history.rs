//! Game record.
//!
//! A [`History`] is the append-only log of confirmed moves plus the starting
//! configuration. It is the only persisted form of a game: every
//! intermediate board is recomputed by replaying the log from scratch.
//!
//! Serialized as `{"rows": .., "cols": .., "base_size": .., "moves": [..]}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardConfig, ConfigError, Move, Player};
use crate::rules::InvalidMove;

/// Errors raised while loading or replaying a game record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed game record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("stored move {index} cannot be replayed: {source}")]
    Replay {
        index: usize,
        #[source]
        source: InvalidMove,
    },
}

/// Starting configuration plus the ordered log of confirmed moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(flatten)]
    config: BoardConfig,
    moves: Vec<Move>,
}

impl History {
    /// Creates an empty record for a new game.
    pub fn new(config: BoardConfig) -> Self {
        Self { config, moves: Vec::new() }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The confirmed moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Appends a confirmed move. Entries are never rewritten.
    pub fn store(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// True once the last stored move is a Conquest.
    pub fn is_finished(&self) -> bool {
        self.moves.last().is_some_and(Move::is_conquest)
    }

    /// The player whose Conquest ended the game, if it has ended.
    pub fn winner(&self) -> Option<Player> {
        self.moves.last().filter(|mv| mv.is_conquest()).map(Move::player)
    }

    /// The starting board.
    pub fn initial_board(&self) -> Board {
        Board::new(self.config)
    }

    /// Replays the log and returns every board from the starting position
    /// onward; the result has `len() + 1` entries.
    ///
    /// Moves are applied without legality checks since they were validated
    /// when staged. A record that cannot be applied at all (an off-board
    /// cell, a conquest with no path) is reported with its index.
    pub fn board_history(&self) -> Result<Vec<Board>, RecordError> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial_board();
        for (index, mv) in self.moves.iter().enumerate() {
            let next = mv.apply(&board, false).map_err(|source| RecordError::Replay { index, source })?;
            boards.push(board);
            board = next;
        }
        boards.push(board);
        Ok(boards)
    }

    /// Parses a record and validates its configuration.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let history: History = serde_json::from_str(json)?;
        history.config.validate()?;
        Ok(history)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}
