//! Move proposal helpers.
//!
//! Input layers use these to decide which intents are worth offering
//! before building a [`Move`](crate::board::Move): which cells can still be
//! acquired, which vanquish corners would pass validation, and whether a
//! conquest is available.

use crate::board::{Board, MoveKind, Player, Position};

/// True if `pos` is an on-board, unowned, non-base cell.
pub fn is_acquirable(board: &Board, pos: Position) -> bool {
    board.cell(pos).is_some_and(|c| c.is_empty() && !c.base)
}

/// All cells an Acquire may target, in row-major order.
pub fn acquirable_cells(board: &Board) -> Vec<Position> {
    board
        .cells()
        .filter(|(_, c)| c.is_empty() && !c.base)
        .map(|(pos, _)| pos)
        .collect()
}

/// All top-left corners where a validated Vanquish by `player` succeeds.
pub fn vanquish_corners(board: &Board, player: Player) -> Vec<Position> {
    board
        .positions()
        .filter(|&corner| board.check_vanquish(player, corner, true).is_ok())
        .collect()
}

/// True if a Conquest by `player` would succeed now.
pub fn can_conquest(board: &Board, player: Player) -> bool {
    board.find_conquest_path(player).is_some()
}

/// Move kinds `player` could legally stage on `board`. Conquer is always
/// offered.
pub fn legal_kinds(board: &Board, player: Player) -> Vec<MoveKind> {
    let mut kinds = Vec::with_capacity(4);
    if board.cells().any(|(_, c)| c.is_empty() && !c.base) {
        kinds.push(MoveKind::Acquire);
    }
    kinds.push(MoveKind::Conquer);
    if !vanquish_corners(board, player).is_empty() {
        kinds.push(MoveKind::Vanquish);
    }
    if can_conquest(board, player) {
        kinds.push(MoveKind::Conquest);
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;

    fn board() -> Board {
        Board::new(BoardConfig::new(15, 30, 3).unwrap())
    }

    #[test]
    fn hollow_centre_is_acquirable() {
        let b = board();
        assert!(is_acquirable(&b, b.base(Player::One)));
        assert!(!is_acquirable(&b, b.base(Player::One).offset(0, 1)));
        assert!(!is_acquirable(&b, Position::new(-1, 0)));
        assert_eq!(acquirable_cells(&b).len(), 15 * 30 - 16);
    }

    #[test]
    fn fresh_board_offers_acquire_and_conquer() {
        let b = board();
        assert_eq!(legal_kinds(&b, Player::One), vec![MoveKind::Acquire, MoveKind::Conquer]);
        assert!(vanquish_corners(&b, Player::Two).is_empty());
        assert!(!can_conquest(&b, Player::Two));
    }

    #[test]
    fn finds_the_enclosed_corner() {
        let mut b = board();
        let corner = Position::new(1, 10);
        for dr in 0..4 {
            for dc in 0..4 {
                assert!(b.set_owner(corner.offset(dr, dc), Some(Player::Two)));
            }
        }
        for dc in 0..4 {
            assert!(b.set_owner(corner.offset(-1, dc), Some(Player::One)));
        }
        assert_eq!(vanquish_corners(&b, Player::One), vec![corner]);
        assert!(legal_kinds(&b, Player::One).contains(&MoveKind::Vanquish));
        assert!(vanquish_corners(&b, Player::Two).is_empty());
    }
}
