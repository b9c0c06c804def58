//! Board representation and move types.
//!
//! Contains the grid cells, players, coordinates, the starting
//! configuration with its base layout, and the move command type.

pub mod cell;
pub mod config;
pub mod moves;
pub mod position;
pub mod state;

pub use cell::{Cell, Player, ALL_PLAYERS};
pub use config::{BoardConfig, ConfigError, MAX_DIMENSION, MIN_COLS, MIN_ROWS};
pub use moves::{Move, MoveKind};
pub use position::{Position, ORTHOGONAL};
pub use state::Board;
