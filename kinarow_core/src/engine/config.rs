use crate::logic::board::MAX_BOARD_SIZE;
use crate::logic::rules::ConfigError;
use serde::{Deserialize, Serialize};

/// Engine settings for one game. Deserializes leniently (absent fields fall
/// back to the defaults); call [`EngineConfig::validate`] before handing the
/// values to the board or the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board side length, `size x size` cells.
    pub size: usize,
    /// Marks in a line needed to win.
    pub win_length: usize,
    /// Search horizon in plies; `None` searches to the end of the game.
    pub depth_limit: Option<u8>,
    /// Rank moves before expansion for stronger alpha-beta cutoffs.
    pub use_ordering: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 3,
            win_length: 3,
            depth_limit: None,
            use_ordering: true,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Checks the same bounds board construction enforces, plus the rule
    /// that an explicit depth limit must allow at least one ply.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidBoardSize { size: self.size });
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(ConfigError::InvalidWinLength {
                win_length: self.win_length,
                size: self.size,
            });
        }
        if self.depth_limit == Some(0) {
            return Err(ConfigError::InvalidDepthLimit);
        }
        Ok(())
    }
}
