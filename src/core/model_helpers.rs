use std::fmt;

use crate::core::{Direction, Monster, Position, Snowball, SnowballSize, SnowballType, Terrain};

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Row and column delta of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// The neighbouring cell, or `None` when the step would leave the
    /// non-negative quadrant. Upper bounds are the grid's business.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Spreadsheet style column label: 0 -> A, 25 -> Z, 26 -> AA.
    pub fn column_label(&self) -> String {
        let mut label = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            label.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        label.reverse();
        String::from_utf8(label).unwrap_or_default()
    }
}

/// Rendered the way a player reads the board: 1-indexed row, lettered column.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.column_label())
    }
}

impl Terrain {
    pub fn is_walkable(self) -> bool {
        self != Terrain::Block
    }
}

impl SnowballSize {
    /// One growth step; big balls stay big.
    pub fn grown(self) -> SnowballSize {
        match self {
            SnowballSize::Small => SnowballSize::Mid,
            SnowballSize::Mid | SnowballSize::Big => SnowballSize::Big,
        }
    }
}

impl From<SnowballSize> for SnowballType {
    fn from(size: SnowballSize) -> Self {
        match size {
            SnowballSize::Small => SnowballType::Small,
            SnowballSize::Mid => SnowballType::Mid,
            SnowballSize::Big => SnowballType::Big,
        }
    }
}

impl SnowballType {
    /// The size of a single ball, `None` for stacks and snowmen.
    pub fn size(self) -> Option<SnowballSize> {
        match self {
            SnowballType::Small => Some(SnowballSize::Small),
            SnowballType::Mid => Some(SnowballSize::Mid),
            SnowballType::Big => Some(SnowballSize::Big),
            _ => None,
        }
    }

    pub fn is_stack(self) -> bool {
        self.parts().is_some()
    }

    pub fn is_complete(self) -> bool {
        self == SnowballType::Complete
    }

    /// The type after rolling over snow. Only single balls grow.
    pub fn grown(self) -> SnowballType {
        match self.size() {
            Some(size) => size.grown().into(),
            None => self,
        }
    }

    /// `(top, bottom)` sizes of a two-ball stack.
    pub fn parts(self) -> Option<(SnowballSize, SnowballSize)> {
        match self {
            SnowballType::MidSmall => Some((SnowballSize::Small, SnowballSize::Mid)),
            SnowballType::BigSmall => Some((SnowballSize::Small, SnowballSize::Big)),
            SnowballType::BigMid => Some((SnowballSize::Mid, SnowballSize::Big)),
            _ => None,
        }
    }

    /// Result of putting `top` onto `bottom`. A ball only goes onto a
    /// strictly larger one, and only a small ball finishes a big+mid stack.
    pub fn stacked(top: SnowballType, bottom: SnowballType) -> Option<SnowballType> {
        use SnowballType::*;
        match (top, bottom) {
            (Small, Mid) => Some(MidSmall),
            (Small, Big) => Some(BigSmall),
            (Mid, Big) => Some(BigMid),
            (Small, BigMid) => Some(Complete),
            _ => None,
        }
    }
}

impl Snowball {
    pub fn new(position: Position, kind: SnowballType) -> Self {
        Snowball { position, kind }
    }
}

impl Monster {
    pub fn new(position: Position) -> Self {
        Monster { position }
    }
}
