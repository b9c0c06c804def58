//! Move types.
//!
//! A move bundles the acting player with the payload its kind needs. The
//! serialized form is the flat record stored in game files:
//! `{"kind": "Acquire", "player": 1, "locs": [[1, 1], [1, 2]]}`.

use serde::{Deserialize, Serialize};

use super::cell::Player;
use super::position::Position;

/// The four kinds of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Acquire,
    Conquer,
    Vanquish,
    Conquest,
}

impl MoveKind {
    /// Returns the single-letter notation code.
    pub const fn code(self) -> char {
        match self {
            MoveKind::Acquire => 'A',
            MoveKind::Conquer => 'C',
            MoveKind::Vanquish => 'V',
            MoveKind::Conquest => 'Q',
        }
    }

    /// Parses a kind from its single-letter notation code.
    pub fn from_code(c: char) -> Option<MoveKind> {
        match c {
            'A' => Some(MoveKind::Acquire),
            'C' => Some(MoveKind::Conquer),
            'V' => Some(MoveKind::Vanquish),
            'Q' => Some(MoveKind::Conquest),
            _ => None,
        }
    }
}

/// A single move by one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Move {
    /// Claim a small batch of empty cells.
    Acquire { player: Player, locs: Vec<Position> },

    /// Flood-capture enemy cells touched on two or more sides.
    Conquer { player: Player },

    /// Erase the 4x4 block whose top-left cell is `corner`.
    Vanquish { player: Player, corner: Position },

    /// Connect to the opponent's base and annex the path.
    Conquest { player: Player },
}

impl Move {
    pub fn acquire(player: Player, locs: impl IntoIterator<Item = Position>) -> Self {
        Move::Acquire { player, locs: locs.into_iter().collect() }
    }

    pub fn conquer(player: Player) -> Self {
        Move::Conquer { player }
    }

    pub fn vanquish(player: Player, corner: Position) -> Self {
        Move::Vanquish { player, corner }
    }

    pub fn conquest(player: Player) -> Self {
        Move::Conquest { player }
    }

    /// The acting player.
    pub fn player(&self) -> Player {
        match *self {
            Move::Acquire { player, .. }
            | Move::Conquer { player }
            | Move::Vanquish { player, .. }
            | Move::Conquest { player } => player,
        }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Acquire { .. } => MoveKind::Acquire,
            Move::Conquer { .. } => MoveKind::Conquer,
            Move::Vanquish { .. } => MoveKind::Vanquish,
            Move::Conquest { .. } => MoveKind::Conquest,
        }
    }

    /// True for the game-ending move kind.
    pub fn is_conquest(&self) -> bool {
        matches!(self, Move::Conquest { .. })
    }
}
