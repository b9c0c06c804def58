//! Conquer: flood-capture of enemy cells.
//!
//! Every non-base cell of the mover touches its orthogonal neighbours. An
//! enemy cell touched twice flips to the mover and starts touching its own
//! neighbours, so a single call runs the capture to a fixed point.

use std::collections::VecDeque;

use tracing::debug;

use crate::board::{Board, Player};

/// Touches needed to capture an enemy cell.
pub const CAPTURE_TOUCHES: u8 = 2;

impl Board {
    /// Runs the flood capture for `player` and returns how many enemy
    /// cells changed hands. Always legal; may capture nothing.
    pub fn conquer(&mut self, player: Player) -> usize {
        let enemy = player.opponent();
        let mut touches = vec![0u8; self.rows() * self.cols()];
        let mut queue: VecDeque<_> = self
            .cells()
            .filter(|(_, cell)| cell.is_field_of(player))
            .map(|(pos, _)| pos)
            .collect();

        let mut captured = 0;
        while let Some(curr) = queue.pop_front() {
            let neighbors: Vec<_> = self.adjacent(curr, false).collect();
            for adj in neighbors {
                if self.owner(adj) != Some(enemy) {
                    continue;
                }
                let Some(idx) = self.index(adj) else { continue };
                touches[idx] += 1;
                if touches[idx] >= CAPTURE_TOUCHES {
                    self.set_owner(adj, Some(player));
                    queue.push_back(adj);
                    captured += 1;
                }
            }
        }

        debug!(player = %player, captured, "conquer");
        captured
    }
}
