use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::MAX_SCORES;
use crate::error::RecordError;

/// A finished level. Fewer moves is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,
    pub level: String,
    pub moves: usize,
}

impl ScoreRecord {
    pub fn new(player: impl Into<String>, level: impl Into<String>, moves: usize) -> Self {
        ScoreRecord {
            player: player.into(),
            level: level.into(),
            moves,
        }
    }
}

/// Best scores of every level, at most `capacity` per level, each level's
/// records ordered by moves ascending. Equal move counts keep the earlier
/// record ahead.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    entries: Vec<ScoreRecord>,
    capacity: usize,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        ScoreBoard::new(MAX_SCORES)
    }
}

impl ScoreBoard {
    pub fn new(capacity: usize) -> Self {
        ScoreBoard {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The level's table, best first.
    pub fn top<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a ScoreRecord> + 'a {
        self.entries.iter().filter(move |entry| entry.level == level)
    }

    pub fn best<'a>(&'a self, level: &'a str) -> Option<&'a ScoreRecord> {
        self.top(level).next()
    }

    /// The rank (1-indexed) a result would get, or `None` if it would not
    /// make the table.
    pub fn potential_rank(&self, level: &str, moves: usize) -> Option<usize> {
        let rank = self.top(level).take_while(|entry| entry.moves <= moves).count() + 1;
        (rank <= self.capacity).then_some(rank)
    }

    pub fn qualifies(&self, level: &str, moves: usize) -> bool {
        self.potential_rank(level, moves).is_some()
    }

    /// Adds the record if it makes its level's table and returns its rank.
    pub fn add_score(&mut self, record: ScoreRecord) -> Option<usize> {
        let rank = self.potential_rank(&record.level, record.moves)?;
        info!(
            "{} ranked #{} on {} with {} moves",
            record.player, rank, record.level, record.moves
        );
        self.insert(record);
        Some(rank)
    }

    fn insert(&mut self, record: ScoreRecord) {
        let insert_at = self
            .entries
            .iter()
            .position(|entry| entry.moves > record.moves)
            .unwrap_or(self.entries.len());
        let level = record.level.clone();
        self.entries.insert(insert_at, record);
        self.trim_level(&level);
    }

    fn trim_level(&mut self, level: &str) {
        let mut kept = 0;
        let capacity = self.capacity;
        self.entries.retain(|entry| {
            if entry.level != level {
                return true;
            }
            kept += 1;
            kept <= capacity
        });
    }

    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path)?;
        let records: Vec<ScoreRecord> = serde_json::from_str(&json)?;
        let mut board = ScoreBoard::new(capacity);
        for record in records {
            board.insert(record);
        }
        Ok(board)
    }

    /// Loads the table, starting an empty one if it is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>, capacity: usize) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("no score file at {}, starting fresh", path.display());
            return ScoreBoard::new(capacity);
        }
        ScoreBoard::load(path, capacity).unwrap_or_else(|err| {
            warn!("cannot load scores from {}: {}", path.display(), err);
            ScoreBoard::new(capacity)
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}
