// Numbered grid cells and their pixel coordinates

use crate::grid::error::{GridError, GridResult};
use crate::{CELL_MARGIN, CELL_SIZE, GRID_COLS, GRID_ROWS, MARKER_SIZE};
use once_cell::sync::Lazy;

/// The process-wide grid, built on first use
pub static GRID: Lazy<Grid> = Lazy::new(Grid::new);

/// One numbered position on the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub number: u32,
    pub x: f64,
    pub y: f64,
}

impl Cell {
    /// Build the cell at `row`/`col`: number is row-major from 1,
    /// coordinate is `size * (index + 1) + margin * index` on each axis.
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            number: (row * GRID_COLS + col + 1) as u32,
            x: Self::axis_position(col),
            y: Self::axis_position(row),
        }
    }

    fn axis_position(index: usize) -> f64 {
        CELL_SIZE * (index as f64 + 1.0) + CELL_MARGIN * index as f64
    }

    /// Row and column this cell was built from
    pub fn row_col(&self) -> (usize, usize) {
        let index = self.number as usize - 1;
        (index / GRID_COLS, index % GRID_COLS)
    }
}

/// Fixed 10x10 table of cells in row-major order
#[derive(Debug, Clone)]
pub struct Grid {
    rows: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|row| std::array::from_fn(|col| Cell::at(row, col))),
        }
    }

    pub fn rows(&self) -> &[[Cell; GRID_COLS]; GRID_ROWS] {
        &self.rows
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> GridResult<&Cell> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(GridError::InvalidCoordinates {
                row,
                col,
                max_row: GRID_ROWS - 1,
                max_col: GRID_COLS - 1,
            });
        }
        Ok(&self.rows[row][col])
    }

    pub fn cell_by_number(&self, number: u32) -> GridResult<&Cell> {
        let count = (GRID_ROWS * GRID_COLS) as u32;
        if number == 0 || number > count {
            return Err(GridError::NumberOutOfRange(number));
        }
        let index = number as usize - 1;
        self.cell_at(index / GRID_COLS, index % GRID_COLS)
    }

    /// Largest marker translation whose anchor still reaches the last row/column.
    pub fn span(&self) -> f64 {
        self.rows[GRID_ROWS - 1][GRID_COLS - 1].y - MARKER_SIZE
    }

    /// Pixel extent of the grid including the trailing cell.
    pub fn extent(&self) -> f64 {
        self.rows[GRID_ROWS - 1][GRID_COLS - 1].x + CELL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_cells() {
        let grid = Grid::new();
        let first = grid.cell_at(0, 0).unwrap();
        assert_eq!(first.number, 1);
        assert_eq!((first.x, first.y), (25.0, 25.0));

        let last = grid.cell_at(9, 9).unwrap();
        assert_eq!(last.number, 100);
        assert_eq!((last.x, last.y), (340.0, 340.0));
    }

    #[test]
    fn test_cell_pitch_is_size_plus_margin() {
        let grid = Grid::new();
        let a = grid.cell_at(2, 3).unwrap();
        let b = grid.cell_at(2, 4).unwrap();
        let c = grid.cell_at(3, 3).unwrap();
        assert_eq!(b.x - a.x, 35.0);
        assert_eq!(c.y - a.y, 35.0);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_invalid_coordinates() {
        let grid = Grid::new();
        assert_eq!(
            grid.cell_at(10, 0),
            Err(GridError::InvalidCoordinates {
                row: 10,
                col: 0,
                max_row: 9,
                max_col: 9
            })
        );
        assert!(grid.cell_at(0, 10).is_err());
    }

    #[test]
    fn test_cell_by_number() {
        let grid = Grid::new();
        assert_eq!(grid.cell_by_number(35).unwrap().row_col(), (3, 4));
        assert_eq!(grid.cell_by_number(0), Err(GridError::NumberOutOfRange(0)));
        assert_eq!(
            grid.cell_by_number(101),
            Err(GridError::NumberOutOfRange(101))
        );
    }

    #[test]
    fn test_span_and_extent() {
        assert_eq!(GRID.span(), 315.0);
        assert_eq!(GRID.extent(), 365.0);
    }
}
