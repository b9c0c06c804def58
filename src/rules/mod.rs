//! Move rules.
//!
//! Implements the four board operations (acquire, conquer, vanquish,
//! conquest) and dispatches a [`Move`] to the matching one. Every operation
//! checks before it mutates, so a rejected move leaves the board untouched.

pub mod acquire;
pub mod conquer;
pub mod conquest;
pub mod vanquish;

use thiserror::Error;

use crate::board::{Board, Move, Player, Position};

pub use vanquish::{SURROUND_REQUIRED, VANQUISH_SIZE};

/// The single rules error: the move is not legal on this board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("cell {0} is already owned")]
    CellOwned(Position),

    #[error("cell {0} is a base cell")]
    BaseCell(Position),

    #[error("cell {0} is listed more than once")]
    DuplicateCell(Position),

    #[error("acquire needs at least one cell")]
    EmptyAcquire,

    #[error("acquire lists {count} cells, limit is {limit}")]
    TooManyCells { count: usize, limit: usize },

    #[error("block at {0} does not fit on the board")]
    BlockOffBoard(Position),

    #[error("block contains base cell {0}")]
    BlockContainsBase(Position),

    #[error("block at {0} is not owned by a single player")]
    BlockNotUniform(Position),

    #[error("block is surrounded by {found} cells, needs {required}")]
    NotSurrounded { found: usize, required: usize },

    #[error("no path connects the two bases")]
    NoPath,

    #[error("it is player {expected}'s turn, not player {found}'s")]
    WrongPlayer { expected: Player, found: Player },
}

impl Move {
    /// Applies this move to a copy of `board` and returns the result.
    ///
    /// `validate` enables the legality checks of Acquire and Vanquish; it is
    /// off when replaying moves that were checked when they were staged.
    /// Conquer is always legal and Conquest validates as it searches, so
    /// both ignore the flag. `board` itself is never modified.
    pub fn apply(&self, board: &Board, validate: bool) -> Result<Board, InvalidMove> {
        let mut next = board.clone();
        match self {
            Move::Acquire { player, locs } => next.acquire(*player, locs, validate)?,
            Move::Conquer { player } => {
                next.conquer(*player);
            }
            Move::Vanquish { player, corner } => next.vanquish(*player, *corner, validate)?,
            Move::Conquest { player } => {
                next.conquest(*player)?;
            }
        }
        Ok(next)
    }
}
