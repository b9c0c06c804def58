//! Move notation.
//!
//! A compact text form for moves, used by the line protocol and for
//! printing game logs. A move is written as the player id followed by the
//! kind letter, then any positions as `row,col`:
//!
//! ```text
//! 1A 1,1 1,2 1,3    player 1 acquires three cells
//! 2C                player 2 conquers
//! 1V 3,4            player 1 vanquishes the block at 3,4
//! 2Q                player 2 attempts a conquest
//! ```
//!
//! An *intent* is the same text without the player id (`A 1,1 1,2`); the
//! session supplies the player.

use thiserror::Error;

use crate::board::{Move, MoveKind, Player, Position};

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown move kind '{0}'")]
    UnknownKind(String),

    #[error("invalid player '{0}'")]
    InvalidPlayer(String),

    #[error("invalid position '{0}', expected row,col")]
    InvalidPosition(String),

    #[error("missing {0}")]
    MissingArgument(String),

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
}

/// Parses a full move such as `1A 1,1 1,2`.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let mut tokens = s.split_whitespace();
    let head = tokens.next().ok_or(NotationError::EmptyInput)?;

    let mut chars = head.chars();
    let player = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .and_then(|d| Player::from_id(d as u8))
        .ok_or_else(|| NotationError::InvalidPlayer(head.to_string()))?;
    let kind = parse_kind(chars.as_str())?;

    parse_body(player, kind, tokens)
}

/// Parses an intent such as `A 1,1 1,2` on behalf of `player`.
pub fn parse_intent(player: Player, s: &str) -> Result<Move, NotationError> {
    let mut tokens = s.split_whitespace();
    let head = tokens.next().ok_or(NotationError::EmptyInput)?;
    let kind = parse_kind(head)?;
    parse_body(player, kind, tokens)
}

fn parse_kind(s: &str) -> Result<MoveKind, NotationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => MoveKind::from_code(c.to_ascii_uppercase())
            .ok_or_else(|| NotationError::UnknownKind(s.to_string())),
        _ => Err(NotationError::UnknownKind(s.to_string())),
    }
}

fn parse_body<'a>(
    player: Player,
    kind: MoveKind,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Move, NotationError> {
    let mv = match kind {
        MoveKind::Acquire => {
            let locs = tokens.by_ref().map(parse_position).collect::<Result<Vec<_>, _>>()?;
            if locs.is_empty() {
                return Err(NotationError::MissingArgument("cells to acquire".to_string()));
            }
            Move::Acquire { player, locs }
        }
        MoveKind::Conquer => Move::Conquer { player },
        MoveKind::Vanquish => {
            let token = tokens
                .next()
                .ok_or_else(|| NotationError::MissingArgument("vanquish corner".to_string()))?;
            Move::Vanquish { player, corner: parse_position(token)? }
        }
        MoveKind::Conquest => Move::Conquest { player },
    };

    match tokens.next() {
        Some(extra) => Err(NotationError::UnexpectedToken(extra.to_string())),
        None => Ok(mv),
    }
}

/// Parses a `row,col` position.
pub fn parse_position(s: &str) -> Result<Position, NotationError> {
    let invalid = || NotationError::InvalidPosition(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}

/// Formats a move in full notation.
pub fn format_move(mv: &Move) -> String {
    let head = format!("{}{}", mv.player(), mv.kind().code());
    match mv {
        Move::Acquire { locs, .. } => {
            let cells: Vec<String> = locs.iter().map(Position::to_string).collect();
            format!("{} {}", head, cells.join(" "))
        }
        Move::Vanquish { corner, .. } => format!("{} {}", head, corner),
        Move::Conquer { .. } | Move::Conquest { .. } => head,
    }
}

/// Formats a slice of moves, one per line.
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(format_move).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn parse_acquire() {
        assert_eq!(
            parse_move("1A 1,1 1,2 1,3").unwrap(),
            Move::acquire(Player::One, [p(1, 1), p(1, 2), p(1, 3)])
        );
    }

    #[test]
    fn parse_payload_free_moves() {
        assert_eq!(parse_move("2C").unwrap(), Move::conquer(Player::Two));
        assert_eq!(parse_move("1Q").unwrap(), Move::conquest(Player::One));
        assert_eq!(parse_move("  2q  ").unwrap(), Move::conquest(Player::Two));
    }

    #[test]
    fn parse_vanquish() {
        assert_eq!(parse_move("2V 3,4").unwrap(), Move::vanquish(Player::Two, p(3, 4)));
        assert_eq!(
            parse_move("2V").unwrap_err(),
            NotationError::MissingArgument("vanquish corner".to_string())
        );
        assert_eq!(parse_move("2V 3,4 5,6").unwrap_err(), NotationError::UnexpectedToken("5,6".to_string()));
    }

    #[test]
    fn parse_intent_uses_given_player() {
        assert_eq!(parse_intent(Player::Two, "A 0,0").unwrap(), Move::acquire(Player::Two, [p(0, 0)]));
        assert_eq!(parse_intent(Player::One, "c").unwrap(), Move::conquer(Player::One));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_move(""), Err(NotationError::EmptyInput));
        assert_eq!(parse_move("3A 1,1"), Err(NotationError::InvalidPlayer("3A".to_string())));
        assert_eq!(parse_move("1X"), Err(NotationError::UnknownKind("X".to_string())));
        assert_eq!(parse_move("1A 1;1"), Err(NotationError::InvalidPosition("1;1".to_string())));
        assert_eq!(
            parse_move("1A"),
            Err(NotationError::MissingArgument("cells to acquire".to_string()))
        );
        assert_eq!(parse_move("1C 2,2"), Err(NotationError::UnexpectedToken("2,2".to_string())));
    }

    #[test]
    fn format_matches_parse() {
        for text in ["1A 1,1 1,2 1,3", "2C", "1V 3,4", "2Q", "2A -1,0"] {
            let mv = parse_move(text).unwrap();
            assert_eq!(format_move(&mv), text);
        }
    }

    #[test]
    fn format_moves_one_per_line() {
        let moves = [Move::conquer(Player::One), Move::conquest(Player::Two)];
        assert_eq!(format_moves(&moves), "1C\n2Q");
    }
}
