//! Conquest: the winning move.
//!
//! A shortest-path search runs from the mover's base through cells the mover
//! owns. The first time a relaxed neighbour turns out to be an enemy base
//! cell, the path that reached it is annexed as new base territory.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use super::InvalidMove;
use crate::board::{Board, Player, Position};

impl Board {
    /// Connects `player`'s base to the opponent's base and marks the
    /// connecting path as base cells. Returns the annexed path, ordered from
    /// the cell touching the enemy base back towards the mover's base (the
    /// search start is not included).
    ///
    /// Fails with [`InvalidMove::NoPath`] if no connection exists; the
    /// board is only written after a path is found.
    pub fn conquest(&mut self, player: Player) -> Result<Vec<Position>, InvalidMove> {
        let path = self.find_conquest_path(player).ok_or(InvalidMove::NoPath)?;
        for &pos in &path {
            if let Some(cell) = self.cell_mut(pos) {
                cell.base = true;
            }
        }
        debug!(player = %player, annexed = path.len(), "conquest");
        Ok(path)
    }

    /// Searches for a conquest path without touching the board.
    pub fn find_conquest_path(&self, player: Player) -> Option<Vec<Position>> {
        let enemy = player.opponent();
        let size = self.rows() * self.cols();
        let mut dist = vec![u32::MAX; size];
        let mut visited = vec![false; size];
        let mut prev: Vec<Option<Position>> = vec![None; size];

        let start = self.base(player);
        let start_idx = self.index(start)?;
        dist[start_idx] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0u32, start)));

        while let Some(Reverse((len, curr))) = heap.pop() {
            let Some(curr_idx) = self.index(curr) else { continue };
            if visited[curr_idx] {
                continue;
            }
            visited[curr_idx] = true;

            for adj in self.adjacent(curr, true) {
                let Some(adj_idx) = self.index(adj) else { continue };
                let cell = self.cell(adj)?;
                if cell.base && cell.owner == Some(enemy) {
                    return Some(trace_path(self, &prev, curr, start));
                }
                if !visited[adj_idx] && cell.owner == Some(player) && dist[adj_idx] > len + 1 {
                    dist[adj_idx] = len + 1;
                    prev[adj_idx] = Some(curr);
                    heap.push(Reverse((len + 1, adj)));
                }
            }
        }
        None
    }
}

/// Walks the predecessor chain from `from` back to `start`, exclusive.
fn trace_path(board: &Board, prev: &[Option<Position>], from: Position, start: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut curr = Some(from);
    while let Some(pos) = curr {
        if pos == start {
            break;
        }
        path.push(pos);
        curr = board.index(pos).and_then(|i| prev[i]);
    }
    path
}
