//! Vanquish: erase an enclosed 4x4 block.

use tracing::debug;

use super::InvalidMove;
use crate::board::{Board, Player, Position};

/// Side length of the vanquished block.
pub const VANQUISH_SIZE: i32 = 4;

/// Mover cells needed on the ring around the block.
pub const SURROUND_REQUIRED: usize = 4;

/// Cells of the block whose top-left cell is `corner`.
pub fn block_cells(corner: Position) -> impl Iterator<Item = Position> {
    (0..VANQUISH_SIZE).flat_map(move |dr| (0..VANQUISH_SIZE).map(move |dc| corner.offset(dr, dc)))
}

/// The 16 cells flush against the four sides of the block, on-board or not.
pub fn surround_cells(corner: Position) -> impl Iterator<Item = Position> {
    (0..VANQUISH_SIZE).flat_map(move |i| {
        [
            corner.offset(-1, i),
            corner.offset(VANQUISH_SIZE, i),
            corner.offset(i, -1),
            corner.offset(i, VANQUISH_SIZE),
        ]
    })
}

impl Board {
    /// Resets the 4x4 block at `corner` to unowned.
    ///
    /// The block must always lie on the board and contain no base cell.
    /// With `validate` set it must also be owned entirely by one player
    /// (either side) and have at least [`SURROUND_REQUIRED`] of its ring
    /// cells held by `player` as non-base cells.
    pub fn vanquish(&mut self, player: Player, corner: Position, validate: bool) -> Result<(), InvalidMove> {
        self.check_vanquish(player, corner, validate)?;
        for pos in block_cells(corner) {
            self.set_owner(pos, None);
        }
        debug!(player = %player, corner = %corner, "vanquished");
        Ok(())
    }

    /// Runs the checks of [`Board::vanquish`] without modifying the board.
    pub fn check_vanquish(&self, player: Player, corner: Position, validate: bool) -> Result<(), InvalidMove> {
        let mut square_owner = None;
        for (i, pos) in block_cells(corner).enumerate() {
            let cell = self.cell(pos).ok_or(InvalidMove::BlockOffBoard(corner))?;
            if cell.base {
                return Err(InvalidMove::BlockContainsBase(pos));
            }
            if !validate {
                continue;
            }
            if i == 0 {
                square_owner = cell.owner;
            }
            if cell.owner.is_none() || cell.owner != square_owner {
                return Err(InvalidMove::BlockNotUniform(corner));
            }
        }

        if validate {
            let found = self.surround_count(player, corner);
            if found < SURROUND_REQUIRED {
                return Err(InvalidMove::NotSurrounded { found, required: SURROUND_REQUIRED });
            }
        }
        Ok(())
    }

    /// Counts ring cells around the block at `corner` that `player` holds
    /// as non-base cells.
    pub fn surround_count(&self, player: Player, corner: Position) -> usize {
        surround_cells(corner)
            .filter_map(|pos| self.cell(pos))
            .filter(|cell| cell.is_field_of(player))
            .count()
    }
}
