//! Text encoding of board positions.
//!
//! One line per row, one character per cell:
//!
//! | char | cell                      |
//! |------|---------------------------|
//! | `.`  | unowned                   |
//! | `x`  | owned by player 1         |
//! | `o`  | owned by player 2         |
//! | `X`  | base cell of player 1     |
//! | `O`  | base cell of player 2     |
//!
//! Dimensions come from the text; base anchors come from the layout rule
//! for the given base size, and every cell of both starting footprints must
//! appear as a base cell of its owner.

use thiserror::Error;

use crate::board::{Board, BoardConfig, Cell, ConfigError, Player, Position, ALL_PLAYERS};

/// Errors that can occur when parsing a board position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("empty position")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("invalid cell character '{ch}' at {row},{col}")]
    InvalidChar { row: usize, col: usize, ch: char },

    #[error("base footprint cell {0} is missing")]
    BaseMismatch(Position),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Returns the character for a cell.
pub fn cell_char(cell: &Cell) -> char {
    match (cell.owner, cell.base) {
        (None, _) => '.',
        (Some(Player::One), false) => 'x',
        (Some(Player::Two), false) => 'o',
        (Some(Player::One), true) => 'X',
        (Some(Player::Two), true) => 'O',
    }
}

fn parse_cell(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::EMPTY),
        'x' => Some(Cell::owned_by(Player::One)),
        'o' => Some(Cell::owned_by(Player::Two)),
        'X' => Some(Cell::base_of(Player::One)),
        'O' => Some(Cell::base_of(Player::Two)),
        _ => None,
    }
}

/// Encodes every row of `board`, one line each.
pub fn encode_rows(board: &Board) -> Vec<String> {
    let cols = board.cols();
    let chars: Vec<char> = board.cells().map(|(_, cell)| cell_char(cell)).collect();
    chars.chunks(cols).map(|row| row.iter().collect()).collect()
}

/// Encodes `board` as newline-separated rows.
pub fn encode_grid(board: &Board) -> String {
    encode_rows(board).join("\n")
}

/// Parses a position. Blank lines and surrounding whitespace are ignored.
pub fn parse_grid(text: &str, base_size: u8) -> Result<Board, GridError> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let cols = lines.first().ok_or(GridError::Empty)?.chars().count();
    let config = BoardConfig::new(lines.len(), cols, base_size)?;

    let mut board = Board::blank(config);
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(GridError::RaggedRow { row, expected: cols, found });
        }
        for (col, ch) in line.chars().enumerate() {
            let cell = parse_cell(ch).ok_or(GridError::InvalidChar { row, col, ch })?;
            if let Some(slot) = board.cell_mut(Position::new(row as i32, col as i32)) {
                *slot = cell;
            }
        }
    }

    for player in ALL_PLAYERS {
        for pos in config.base_footprint(player) {
            if board.cell(pos) != Some(&Cell::base_of(player)) {
                return Err(GridError::BaseMismatch(pos));
            }
        }
    }
    Ok(board)
}
