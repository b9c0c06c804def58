//! Board state.
//!
//! Holds a complete snapshot of the grid at one point in a game. Boards are
//! plain values: cloning produces an independent deep copy, which is how the
//! session keeps its confirmed timeline apart from the working board.

use super::cell::{Cell, Player};
use super::config::BoardConfig;
use super::position::Position;

/// Complete grid state.
///
/// Cells are stored row-major in a flat vector sized once at construction.
/// The base anchors are fixed by the configuration and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    bases: [Position; 2],
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the starting board: every cell unowned except the two base
    /// footprints.
    pub fn new(config: BoardConfig) -> Self {
        let mut board = Self::blank(config);
        for player in super::ALL_PLAYERS {
            for pos in config.base_footprint(player) {
                if let Some(cell) = board.cell_mut(pos) {
                    *cell = Cell::base_of(player);
                }
            }
        }
        board
    }

    /// Creates a board with the configured base anchors but no cells
    /// painted. Used by position parsing, which supplies every cell itself.
    pub(crate) fn blank(config: BoardConfig) -> Self {
        Board {
            config,
            bases: [config.base_anchor(Player::One), config.base_anchor(Player::Two)],
            cells: vec![Cell::EMPTY; config.rows * config.cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The recorded base position of `player`.
    #[inline]
    pub fn base(&self, player: Player) -> Position {
        self.bases[player.index()]
    }

    /// Returns true if `pos` lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.config.rows
            && (pos.col as usize) < self.config.cols
    }

    #[inline]
    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.config.cols + pos.col as usize)
        } else {
            None
        }
    }

    /// Returns the cell at `pos`, or `None` if off-board.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// Owner of the cell at `pos`; `None` if unowned or off-board.
    #[inline]
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.cell(pos).and_then(|c| c.owner)
    }

    /// True if `pos` is an on-board base cell.
    #[inline]
    pub fn is_base(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| c.base)
    }

    /// Sets the owner of a non-base cell. Returns false if `pos` is
    /// off-board or a base cell.
    pub fn set_owner(&mut self, pos: Position, owner: Option<Player>) -> bool {
        match self.cell_mut(pos) {
            Some(cell) if !cell.base => {
                cell.owner = owner;
                true
            }
            _ => false,
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.config.cols as i32;
        (0..self.config.rows as i32).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.positions().zip(self.cells.iter())
    }

    /// On-board orthogonal neighbours of `pos`. Base cells are included
    /// only when `include_base` is set.
    pub fn adjacent(&self, pos: Position, include_base: bool) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |&n| match self.cell(n) {
            Some(cell) => include_base || !cell.base,
            None => false,
        })
    }

    /// Number of cells owned by `player`, base cells included.
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.owner == Some(player)).count()
    }
}
