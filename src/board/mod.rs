//! Board representation for locked-five Caro

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board that can hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board with single-letter column labels (A-Z)
pub const MAX_BOARD_SIZE: usize = 26;

/// The two players. X moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// Cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    X,
    O,
}

impl Stone {
    /// Owning player, `None` for an empty cell
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Stone::X => Some(Player::X),
            Stone::O => Some(Player::O),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Stone::X => 'X',
            Stone::O => 'O',
            Stone::Empty => '.',
        }
    }
}

impl From<Player> for Stone {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Stone::X,
            Player::O => Stone::O,
        }
    }
}

/// Position on the board. Validity depends on the board it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `(dr, dc)`. Returns the raw signed coordinates,
    /// which may be off any board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (self.row as i32 + dr * steps, self.col as i32 + dc * steps)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
