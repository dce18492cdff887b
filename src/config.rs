//! Rule configuration: board size and explosion win threshold

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::EngineError;
use crate::rules::DEFAULT_EXPLOSION_WIN_THRESHOLD;

/// Values the engine takes from outside. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub board_size: usize,
    pub explosion_win_threshold: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            explosion_win_threshold: DEFAULT_EXPLOSION_WIN_THRESHOLD,
        }
    }
}

impl RuleConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::BoardSize {
                size: self.board_size,
            });
        }
        if self.explosion_win_threshold == 0 {
            return Err(EngineError::Config(
                "explosion_win_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: RuleConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}
