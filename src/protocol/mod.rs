//! Text protocol.
//!
//! Move notation, the board position text format, and the line-command
//! parser used by the shell's main loop.

pub mod grid;
pub mod notation;
pub mod parser;

pub use grid::{encode_grid, encode_rows, parse_grid, GridError};
pub use notation::{format_move, format_moves, parse_intent, parse_move, parse_position, NotationError};
pub use parser::{parse_command, Command};
