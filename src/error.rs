use std::io;

use thiserror::Error;

use crate::core::Position;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("level has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("level has no monster")]
    MissingMonster,
    #[error("level has more than one monster (second at {0})")]
    DuplicateMonster(Position),
    #[error("unknown level character {ch:?} at {position}")]
    UnknownCharacter { ch: char, position: Position },
    #[error("{0} is outside the level")]
    OutOfBounds(Position),
    #[error("{0} is a block and cannot hold the monster or a snowball")]
    OnBlock(Position),
    #[error("{0} must hold a finished snowman exactly when its terrain is a snowman")]
    SnowmanMismatch(Position),
    #[error("more than one entity at {0}")]
    Overlap(Position),
    #[error("invalid level json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read level: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("record json failed: {0}")]
    Json(#[from] serde_json::Error),
}
