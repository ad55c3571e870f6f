use std::fmt;
use std::fs::{self, File};
use std::io::{LineWriter, Write};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{BoardEvent, BoardObserver, Position};
use crate::error::RecordError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for MoveLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Appends one entry per monster step. Pushing a stack apart leaves the
/// monster in place and is not logged.
#[derive(Default)]
pub struct MoveLog {
    entries: Vec<MoveLogEntry>,
    sink: Option<Box<dyn Write>>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also writes each entry as a line to `sink`.
    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        MoveLog {
            entries: Vec::new(),
            sink: Some(sink),
        }
    }

    /// Writes to a fresh file at `path`, creating parent directories.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::with_sink(Box::new(LineWriter::new(file))))
    }

    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.to_string()).collect()
    }

    fn record(&mut self, entry: MoveLogEntry) {
        self.entries.push(entry);
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = writeln!(sink, "{}", entry) {
                warn!("move log write failed, continuing without it: {}", err);
                self.sink = None;
            }
        }
    }
}

impl BoardObserver for MoveLog {
    fn on_events(&mut self, events: &[BoardEvent]) {
        let from = events.iter().find_map(|event| match event {
            BoardEvent::MonsterCleared(pos) => Some(*pos),
            _ => None,
        });
        let to = events.iter().find_map(|event| match event {
            BoardEvent::MonsterMoved(pos) => Some(*pos),
            _ => None,
        });
        if let (Some(from), Some(to)) = (from, to) {
            self.record(MoveLogEntry { from, to });
        }
    }
}

impl fmt::Debug for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveLog")
            .field("entries", &self.entries)
            .field("writing", &self.sink.is_some())
            .finish()
    }
}
