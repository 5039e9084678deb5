// Pointer drag tracking: start, per-move deltas and the offset from the start point.

/// A position on the virtual screen, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Pointer position when the drag started
    pub start_pos: Option<Point>,
    /// Last pointer position seen during the drag
    pub last_pos: Option<Point>,
}

impl DragState {
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position, returning the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Point> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `current` from the drag start
    pub fn total_offset(&self, current: Point) -> Option<Point> {
        self.start_pos.map(|start| current - start)
    }

    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
