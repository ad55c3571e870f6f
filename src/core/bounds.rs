use crate::core::Position;

/// A bounding box with one corner fixed at row 0, col 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub rows: usize,
    pub cols: usize,
}

impl BoundsOriginRoot {
    pub fn new(rows: usize, cols: usize) -> BoundsOriginRoot {
        BoundsOriginRoot { rows, cols }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}
