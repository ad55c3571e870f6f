use crate::core::Position;
use crate::core::BoundsOriginRoot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area()];
        BoundedGrid { bounds, cells }
    }

    /// Builds a grid from row-major rows. The caller guarantees the rows are
    /// all the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.first().map_or(0, |row| row.len());
        let bounds = BoundsOriginRoot::new(rows.len(), cols);
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), bounds.area(), "rows must be rectangular");
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.bounds.cols;
        (0..self.bounds.area()).map(move |index| Position::new(index / cols, index % cols))
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[index.row * self.bounds.cols + index.col]
    }
}

impl<T> std::ops::IndexMut<&Position> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        &mut self.cells[index.row * self.bounds.cols + index.col]
    }
}
