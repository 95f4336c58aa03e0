//! Engine settings, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use pig_chess_core::{ChessError, Result, SearchLimits};
use serde::{Deserialize, Serialize};

/// Strongest accepted bot level.
pub const MAX_LEVEL: u8 = 10;

/// Engine configuration
///
/// ```toml
/// default_depth = 4
/// move_time_ms = 2000
/// positional = true
/// white_level = 0
/// black_level = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth used by `find_best_move` callers that do not pass one, and by
    /// bot moves for a side whose level is 0.
    pub default_depth: u8,
    /// Per-move time budget; `None` searches to full depth.
    pub move_time_ms: Option<u64>,
    /// Add piece-square bonuses to the material count.
    pub positional: bool,
    /// 0 = human, 1..=10 = bot strength.
    pub white_level: u8,
    pub black_level: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: 4,
            move_time_ms: None,
            positional: true,
            white_level: 0,
            black_level: 0,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: EngineConfig = toml::from_str(text)
            .map_err(|e| ChessError::Config(format!("Failed to parse: {e}")))?;
        config.white_level = config.white_level.min(MAX_LEVEL);
        config.black_level = config.black_level.min(MAX_LEVEL);
        config.default_depth = config.default_depth.max(1);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChessError::Config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChessError::Config(format!("Failed to serialize: {e}")))
    }

    /// Limits for a search to `depth` under the configured move time.
    pub fn limits(&self, depth: u8) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(depth),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
