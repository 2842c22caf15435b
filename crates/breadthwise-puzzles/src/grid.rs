use crate::Coordinates;

/// A rectangular, row-major grid of cells.
///
/// Equality and hashing cover the dimensions and every cell, so a grid can be
/// part of a configuration's semantic state.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::{Coordinates, Grid};
///
/// let mut grid = Grid::new(0_u8, 2, 3).unwrap();
/// assert!(grid.set(Coordinates::new(1, 2), 7));
/// assert_eq!(grid.get(Coordinates::new(1, 2)), Some(&7));
/// assert_eq!(grid.get(Coordinates::new(2, 0)), None);
/// assert!(!grid.contains(Coordinates::new(0, -1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a `rows x cols` grid with every cell set to `fill`.
    ///
    /// Returns `None` if the number of cells overflows `usize`.
    #[must_use]
    pub fn new(fill: T, rows: usize, cols: usize) -> Option<Self>
    where
        T: Clone,
    {
        let len = rows.checked_mul(cols)?;
        Some(Self {
            rows,
            cols,
            cells: vec![fill; len],
        })
    }

    /// Creates a grid from row-major cells.
    ///
    /// Returns `None` if `cells` does not hold exactly `rows * cols` values.
    #[must_use]
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        (rows.checked_mul(cols) == Some(cells.len())).then_some(Self { rows, cols, cells })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Coordinates) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the cell at `pos`, or `None` if it is off the grid.
    #[must_use]
    pub fn get(&self, pos: Coordinates) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Replaces the cell at `pos`.
    ///
    /// Returns `false` and leaves the grid unchanged if `pos` is off the grid.
    pub fn set(&mut self, pos: Coordinates, value: T) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the rows, each as a slice of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` rejects a zero chunk size; a zero-column grid has no cells to yield.
        self.cells.chunks(self.cols.max(1))
    }

    fn index(&self, pos: Coordinates) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = Grid::new('_', 2, 3).unwrap();
        assert!(grid.contains(Coordinates::new(0, 0)));
        assert!(grid.contains(Coordinates::new(1, 2)));
        assert!(!grid.contains(Coordinates::new(2, 0)));
        assert!(!grid.contains(Coordinates::new(0, 3)));
        assert!(!grid.contains(Coordinates::new(-1, 0)));
    }

    #[test]
    fn test_set_off_grid_is_rejected() {
        let mut grid = Grid::new(0, 1, 1).unwrap();
        assert!(!grid.set(Coordinates::new(1, 0), 5));
        assert_eq!(grid, Grid::new(0, 1, 1).unwrap());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert!(Grid::new(0_u8, usize::MAX, 2).is_none());
        assert!(Grid::<u8>::from_cells(usize::MAX, 2, vec![]).is_none());
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![1, 2, 3]).is_none());
        let grid = Grid::from_cells(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(Coordinates::new(1, 0)), Some(&3));
        let rows: Vec<&[i32]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_equality_covers_cells() {
        let a = Grid::new(0, 2, 2).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(Coordinates::new(0, 1), 1);
        assert_ne!(a, b);
    }
}
