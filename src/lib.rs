// grid_picker - pick a number by dragging a marker over a 10x10 grid
// The grid, resolver and movement logic live here; the binary wires them to the terminal.

pub mod app;
pub mod config;
pub mod errors;
pub mod grid;
pub mod marker;
pub mod selection;

// Re-export the main types for easy access
pub use config::PickerConfig;
pub use errors::{PickerError, PickerResult};
pub use grid::{resolve, Cell, Grid, GridError, GridResult, GRID};
pub use marker::{AnimatedValue, Direction, EasingType, Marker, MarkerBounds};
pub use selection::{LoggingObserver, SelectionObserver, SelectionTracker};

// Grid geometry (pixels). Fixed for the lifetime of the process.
pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;
pub const CELL_SIZE: f64 = 25.0;
pub const CELL_MARGIN: f64 = 10.0;

/// Side of the marker square; the resolver samples at translation + this.
pub const MARKER_SIZE: f64 = 25.0;
/// Distance kept between the marker and the far screen edge.
pub const MARKER_EDGE_OFFSET: f64 = 75.0;

pub const DEFAULT_ANIMATION_MS: u64 = 1000;
