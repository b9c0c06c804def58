//! Acquire: claim a batch of empty cells.
//!
//! The batch size cap is a session rule; the board only checks the cells
//! themselves.

use tracing::debug;

use super::InvalidMove;
use crate::board::{Board, Player, Position};

impl Board {
    /// Claims every cell in `locs` for `player`.
    ///
    /// Off-board and base targets are always refused. With `validate` set,
    /// the batch must also be non-empty, free of duplicates, and every
    /// target must currently be unowned. Nothing is written unless every
    /// check passes.
    pub fn acquire(&mut self, player: Player, locs: &[Position], validate: bool) -> Result<(), InvalidMove> {
        self.check_acquire(locs, validate)?;
        for &pos in locs {
            self.set_owner(pos, Some(player));
        }
        debug!(player = %player, cells = locs.len(), "acquired");
        Ok(())
    }

    /// Runs the checks of [`Board::acquire`] without modifying the board.
    pub fn check_acquire(&self, locs: &[Position], validate: bool) -> Result<(), InvalidMove> {
        if validate && locs.is_empty() {
            return Err(InvalidMove::EmptyAcquire);
        }
        for (i, &pos) in locs.iter().enumerate() {
            let cell = self.cell(pos).ok_or(InvalidMove::OffBoard(pos))?;
            if cell.base {
                return Err(InvalidMove::BaseCell(pos));
            }
            if !validate {
                continue;
            }
            if !cell.is_empty() {
                return Err(InvalidMove::CellOwned(pos));
            }
            if locs[..i].contains(&pos) {
                return Err(InvalidMove::DuplicateCell(pos));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;

    fn board() -> Board {
        Board::new(BoardConfig::new(15, 30, 2).unwrap())
    }

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn claims_empty_cells() {
        let mut b = board();
        b.acquire(Player::One, &[p(1, 1), p(1, 2), p(1, 3)], true).unwrap();
        for col in 1..=3 {
            assert_eq!(b.owner(p(1, col)), Some(Player::One));
        }
        assert_eq!(b.count_owned(Player::One), 4 + 3);
    }

    #[test]
    fn owned_target_rejects_whole_batch() {
        let mut b = board();
        b.acquire(Player::Two, &[p(2, 2)], true).unwrap();
        let before = b.clone();

        let err = b.acquire(Player::One, &[p(2, 1), p(2, 2)], true).unwrap_err();
        assert_eq!(err, InvalidMove::CellOwned(p(2, 2)));
        assert_eq!(b, before);
    }

    #[test]
    fn own_cells_cannot_be_reacquired() {
        let mut b = board();
        b.acquire(Player::One, &[p(0, 0)], true).unwrap();
        assert_eq!(b.acquire(Player::One, &[p(0, 0)], true), Err(InvalidMove::CellOwned(p(0, 0))));
    }

    #[test]
    fn base_cells_are_refused_even_when_trusted() {
        let mut b = board();
        let anchor = b.base(Player::Two);
        let before = b.clone();
        assert_eq!(b.acquire(Player::One, &[anchor], false), Err(InvalidMove::BaseCell(anchor)));
        assert_eq!(b, before);
    }

    #[test]
    fn off_board_is_refused() {
        let mut b = board();
        assert_eq!(b.acquire(Player::One, &[p(0, 30)], false), Err(InvalidMove::OffBoard(p(0, 30))));
    }

    #[test]
    fn duplicates_and_empty_batches_fail_validation() {
        let mut b = board();
        assert_eq!(b.acquire(Player::One, &[p(3, 3), p(3, 3)], true), Err(InvalidMove::DuplicateCell(p(3, 3))));
        assert_eq!(b.acquire(Player::One, &[], true), Err(InvalidMove::EmptyAcquire));
        assert_eq!(b, board());
    }
}
