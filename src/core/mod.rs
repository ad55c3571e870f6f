mod board;
mod bounded_grid;
mod bounds;
mod consts;
mod events;
mod model_helpers;
mod models;
mod update;

pub use board::Board;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use events::{BoardEvent, BoardObserver, EventHistory};
pub use models::{Direction, MobileElement, Monster, Position, Snowball, SnowballSize, SnowballType, Terrain};
pub use update::{
    MoveOutcome, MoveResult, Rejection, SnowballOutcome, Unstack, resolve_monster_move,
    resolve_snowball_move, resolve_unstack,
};
