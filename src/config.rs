use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::MAX_SCORES;
use crate::error::RecordError;

/// Where records go and how many scores are kept. Every field has a default,
/// so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_scores: usize,
    pub scores_path: PathBuf,
    pub move_log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_scores: MAX_SCORES,
            scores_path: PathBuf::from("scores.json"),
            move_log_dir: PathBuf::from("move_logs"),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            warn!("using default config, cannot read {}: {}", path.display(), err);
            GameConfig::default()
        })
    }

    /// Move log file for one player on one level.
    pub fn move_log_path(&self, player: &str, level: &str) -> PathBuf {
        self.move_log_dir.join(format!("{}_{}.log", level, player))
    }
}
