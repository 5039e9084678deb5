use std::fmt;

/// Result type for grid lookups
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur when addressing a cell directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidCoordinates {
        row: usize,
        col: usize,
        max_row: usize,
        max_col: usize,
    },
    NumberOutOfRange(u32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCoordinates {
                row,
                col,
                max_row,
                max_col,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}), max is ({}, {})",
                    row, col, max_row, max_col
                )
            }
            GridError::NumberOutOfRange(number) => {
                write!(
                    f,
                    "Cell number {} is outside 1..={}",
                    number,
                    crate::GRID_ROWS * crate::GRID_COLS
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
