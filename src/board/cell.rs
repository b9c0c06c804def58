//! Players and grid cells.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Serialized as the integer `1` or `2`, which is also the ownership id
/// stored in game records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

impl Player {
    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the ownership id (1 or 2).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Converts an ownership id back into a player. Returns `None` for 0
    /// and any other value.
    #[inline]
    pub const fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Index into per-player arrays (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Player::from_id(id).ok_or_else(|| format!("invalid player id {id}, expected 1 or 2"))
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.id()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A single grid cell.
///
/// `base` cells belong permanently to their owner: they are skipped by
/// Conquer's flood and can never be vanquished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub owner: Option<Player>,
    pub base: bool,
}

impl Cell {
    /// An unowned, non-base cell.
    pub const EMPTY: Cell = Cell { owner: None, base: false };

    /// A base cell owned by `player`.
    pub const fn base_of(player: Player) -> Cell {
        Cell { owner: Some(player), base: true }
    }

    /// A regular cell owned by `player`.
    pub const fn owned_by(player: Player) -> Cell {
        Cell { owner: Some(player), base: false }
    }

    /// Ownership in record encoding: 0 = unowned, otherwise the player id.
    #[inline]
    pub fn owner_id(&self) -> u8 {
        self.owner.map_or(0, Player::id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// True if the cell is owned by `player` and is not a base cell.
    #[inline]
    pub fn is_field_of(&self, player: Player) -> bool {
        self.owner == Some(player) && !self.base
    }
}
