// Bounded random nudges for the marker
//
// Each direction draws a uniform integer between the marker's current
// translation and the matching edge: 0 for left/up, the far bound for
// right/down.

use crate::grid::GRID;
use crate::MARKER_EDGE_OFFSET;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Largest translation the marker may take on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl MarkerBounds {
    /// Horizontal travel stops `MARKER_EDGE_OFFSET` short of the screen edge;
    /// vertical travel stops at the last grid row.
    pub fn for_screen(screen_width: f64) -> Self {
        Self {
            max_x: (screen_width - MARKER_EDGE_OFFSET).max(0.0),
            max_y: GRID.span(),
        }
    }

    pub fn max_for(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(0.0, self.max_x)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(0.0, self.max_y)
    }
}

/// Closed integer interval a move in `direction` may land in, given the
/// current translation on that axis. A fractional position is rounded
/// toward the origin for left/up and away from it for right/down, so a move
/// never lands behind the marker.
pub fn target_interval(direction: Direction, current: f64, bounds: &MarkerBounds) -> (i64, i64) {
    let max = (bounds.max_for(direction.axis()).floor() as i64).max(0);
    if !current.is_finite() {
        return match direction {
            Direction::Left | Direction::Up => (0, 0),
            Direction::Right | Direction::Down => (0, max),
        };
    }
    match direction {
        Direction::Left | Direction::Up => (0, (current.floor() as i64).clamp(0, max)),
        Direction::Right | Direction::Down => ((current.ceil() as i64).clamp(0, max), max),
    }
}

/// Uniformly random target for a move in `direction`
pub fn random_target<R: Rng>(
    rng: &mut R,
    direction: Direction,
    current: f64,
    bounds: &MarkerBounds,
) -> i64 {
    let (lo, hi) = target_interval(direction, current, bounds);
    rng.gen_range(lo..=hi)
}
