//! Starting configuration and base layout.
//!
//! A game is fully determined by its dimensions, its base footprint size,
//! and the list of confirmed moves. The base footprints are derived from
//! the configuration by a fixed rule so they never need to be stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::Player;
use super::position::Position;

pub const MIN_ROWS: usize = 3;
pub const MIN_COLS: usize = 14;
pub const MAX_DIMENSION: usize = 256;

/// Errors raised when validating a [`BoardConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base size must be 2 or 3, got {0}")]
    InvalidBaseSize(u8),

    #[error("rows must be between 3 and 256, got {0}")]
    InvalidRows(usize),

    #[error("cols must be between 14 and 256, got {0}")]
    InvalidCols(usize),
}

/// Immutable starting configuration of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub base_size: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 14, cols: 28, base_size: 2 }
    }
}

impl BoardConfig {
    /// Creates a validated configuration.
    pub fn new(rows: usize, cols: usize, base_size: u8) -> Result<Self, ConfigError> {
        let config = Self { rows, cols, base_size };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration using a ring base on odd row counts and a
    /// block base on even ones.
    pub fn with_default_base(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let base_size = if rows % 2 == 1 { 3 } else { 2 };
        Self::new(rows, cols, base_size)
    }

    /// Checks that both base footprints fit on the board without overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_size != 2 && self.base_size != 3 {
            return Err(ConfigError::InvalidBaseSize(self.base_size));
        }
        if !(MIN_ROWS..=MAX_DIMENSION).contains(&self.rows) {
            return Err(ConfigError::InvalidRows(self.rows));
        }
        if !(MIN_COLS..=MAX_DIMENSION).contains(&self.cols) {
            return Err(ConfigError::InvalidCols(self.cols));
        }
        Ok(())
    }

    /// The recorded base position of `player`: the hollow centre of a ring
    /// base, or the top-left cell of a block base. Conquest searches start
    /// here.
    pub fn base_anchor(&self, player: Player) -> Position {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        if self.base_size == 3 {
            let col = match player {
                Player::One => 5,
                Player::Two => cols - 6,
            };
            Position::new(rows / 2, col)
        } else {
            let col = match player {
                Player::One => 4,
                Player::Two => cols - 6,
            };
            Position::new((rows - 2) / 2, col)
        }
    }

    /// The cells forming `player`'s base. The hollow centre of a ring is
    /// not part of the footprint.
    pub fn base_footprint(&self, player: Player) -> Vec<Position> {
        let anchor = self.base_anchor(player);
        if self.base_size == 3 {
            let mut cells = Vec::with_capacity(8);
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr != 0 || dc != 0 {
                        cells.push(anchor.offset(dr, dc));
                    }
                }
            }
            cells
        } else {
            vec![anchor, anchor.offset(0, 1), anchor.offset(1, 0), anchor.offset(1, 1)]
        }
    }
}
