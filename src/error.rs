//! Error type shared by the rule engine and the game session

use thiserror::Error;

use crate::board::{Player, Pos};

/// Contract violations and rejected moves
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("board size {size} is outside the supported range 5..=26")]
    BoardSize { size: usize },

    #[error("({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("anchor ({}, {}) does not hold a {expected} stone", pos.row, pos.col)]
    AnchorMismatch { pos: Pos, expected: Player },

    #[error("explosion was computed at board generation {expected}, board is at {actual}")]
    StaleExplosion { expected: u64, actual: u64 },

    #[error("({}, {}) is already occupied", pos.row, pos.col)]
    Occupied { pos: Pos },

    #[error("game is over")]
    GameOver,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Config(String),
}
