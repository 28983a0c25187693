use crate::core::models::Coord;

/// Fixed size row-major grid. The size is set on construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(rows: usize, cols: usize, default: T) -> Self
    where
        T: Clone,
    {
        BoundedGrid {
            rows,
            cols,
            cells: vec![default; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: &Coord) -> Option<&T> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord { row, col }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> std::ops::Index<&Coord> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Coord) -> &Self::Output {
        assert!(self.contains(index), "{:?} outside {}x{} grid", index, self.rows, self.cols);
        &self.cells[index.row * self.cols + index.col]
    }
}

impl<T> std::ops::IndexMut<&Coord> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Coord) -> &mut Self::Output {
        assert!(self.contains(index), "{:?} outside {}x{} grid", index, self.rows, self.cols);
        &mut self.cells[index.row * self.cols + index.col]
    }
}
