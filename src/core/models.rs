use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    NoSnow,
    Snow,
    Block,
    Snowman,
}

/// A cell on the board. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SnowballSize {
    Small,
    Mid,
    Big,
}

/// What occupies a snowball cell: a single ball, a two-ball stack named
/// bottom-first (`MidSmall` is a small ball sitting on a mid one), or a
/// finished snowman.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnowballType {
    Small,
    Mid,
    Big,
    MidSmall,
    BigSmall,
    BigMid,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snowball {
    pub position: Position,
    pub kind: SnowballType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    pub position: Position,
}

/// Anything on the board that can be moved by a single directional step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MobileElement {
    Monster,
    Snowball(Position),
}
