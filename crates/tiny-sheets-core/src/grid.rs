//! The fixed-size cell store

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A dense `rows x cols` grid of cells
///
/// The shape is fixed at construction and the grid exclusively owns every
/// cell. After loading, the grid is read-only; the only mutation left is the
/// evaluation lifecycle each formula cell tracks internally.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given shape, filled with empty cells
    ///
    /// Bounds: 1-9 rows, 1-26 columns.
    pub fn new(rows: u8, cols: u8) -> Result<Self> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Look up a cell; `None` if the position is outside the grid
    pub fn cell(&self, row: u8, col: u8) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.cells[self.index(row, col)])
    }

    /// Replace the cell at a position (used while loading)
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> Result<()> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows));
        }
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(col, self.cols));
        }
        let index = self.index(row, col);
        self.cells[index] = cell;
        Ok(())
    }

    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        for row in 0..3 {
            for col in 0..4 {
                assert!(grid.cell(row, col).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(Grid::new(1, 1).is_ok());
        assert!(Grid::new(9, 26).is_ok());
        assert!(matches!(
            Grid::new(0, 5),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(10, 5),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(5, 27),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, Cell::Text("x".into())).unwrap();
        assert_eq!(grid.cell(1, 1), Some(&Cell::Text("x".into())));

        assert!(matches!(
            grid.set(2, 0, Cell::Empty),
            Err(Error::RowOutOfBounds(2, 2))
        ));
        assert!(matches!(
            grid.set(0, 2, Cell::Empty),
            Err(Error::ColumnOutOfBounds(2, 2))
        ));
    }

    #[test]
    fn test_out_of_bounds_lookup_is_none() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 2).is_none());
    }
}
