//! Collaborators that keep a record of play: the per-game move log and the
//! persistent score table. Their I/O failures are logged and never stop a game.

mod move_log;
mod scores;

pub use move_log::{MoveLog, MoveLogEntry};
pub use scores::{ScoreBoard, ScoreRecord};
