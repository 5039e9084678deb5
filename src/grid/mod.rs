// Grid module - the fixed numbered grid and the nearest-cell lookup over it

pub mod cell;
pub mod error;
pub mod resolver;

pub use cell::{Cell, Grid, GRID};
pub use error::{GridError, GridResult};
pub use resolver::{distance, nearest_cell, nearest_in_row, resolve};
