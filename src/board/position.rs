//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// Orthogonal step offsets: right, left, down, up.
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A (row, col) coordinate. May lie off the board; validity is decided by
/// [`Board::contains`](super::Board::contains).
///
/// Serialized as a two-element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by `(dr, dc)`.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Position {
        Position { row: self.row + dr, col: self.col + dc }
    }

    /// The four orthogonal neighbours, on-board or not.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        ORTHOGONAL.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
