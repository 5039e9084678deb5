// Nearest-cell lookup over the fixed grid
//
// Two-stage reduction: the closest cell of every row, then the closest of those
// row winners. A candidate only replaces the current best when it is strictly
// closer, so ties keep the earlier column and then the earlier row.

use crate::grid::cell::{Cell, Grid, GRID};
use crate::GRID_COLS;

/// Euclidean distance from (x, y) to a cell's coordinate
pub fn distance(x: f64, y: f64, cell: &Cell) -> f64 {
    ((x - cell.x).powi(2) + (y - cell.y).powi(2)).sqrt()
}

fn closer<'a>(x: f64, y: f64, best: &'a Cell, candidate: &'a Cell) -> &'a Cell {
    if distance(x, y, candidate) < distance(x, y, best) {
        candidate
    } else {
        best
    }
}

/// Closest cell within one row
pub fn nearest_in_row(row: &[Cell; GRID_COLS], x: f64, y: f64) -> &Cell {
    row[1..]
        .iter()
        .fold(&row[0], |best, candidate| closer(x, y, best, candidate))
}

/// Closest cell of the whole grid
pub fn nearest_cell(grid: &Grid, x: f64, y: f64) -> &Cell {
    let mut winners = grid.rows().iter().map(|row| nearest_in_row(row, x, y));
    // A grid always has at least one row
    let first = winners.next().unwrap_or(&grid.rows()[0][0]);
    winners.fold(first, |best, candidate| closer(x, y, best, candidate))
}

/// Number of the cell closest to (x, y) on the process-wide grid
pub fn resolve(x: f64, y: f64) -> u32 {
    nearest_cell(&GRID, x, y).number
}
