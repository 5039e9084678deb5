// The draggable marker square: two animated translations plus drag state

use crate::marker::animation::AnimatedValue;
use crate::marker::drag::{DragState, Point};
use crate::marker::easing::EasingType;
use crate::marker::movement::{random_target, Axis, Direction, MarkerBounds};
use crate::MARKER_SIZE;
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Marker {
    x: AnimatedValue,
    y: AnimatedValue,
    bounds: MarkerBounds,
    drag: DragState,
    // Translation when the current drag started
    drag_origin: Point,
}

impl Marker {
    pub fn new(bounds: MarkerBounds, duration: Duration, easing: EasingType) -> Self {
        Self {
            x: AnimatedValue::new(0.0, duration, easing),
            y: AnimatedValue::new(0.0, duration, easing),
            bounds,
            drag: DragState::default(),
            drag_origin: Point::default(),
        }
    }

    pub fn bounds(&self) -> &MarkerBounds {
        &self.bounds
    }

    /// Current translation of the marker from its resting corner
    pub fn translation_at(&self, now: Instant) -> Point {
        Point::new(self.x.value_at(now), self.y.value_at(now))
    }

    /// Point the nearest-cell lookup samples: the marker's far corner
    pub fn anchor_at(&self, now: Instant) -> Point {
        let t = self.translation_at(now);
        Point::new(t.x + MARKER_SIZE, t.y + MARKER_SIZE)
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Pick a random target in `direction` and start animating toward it.
    /// Returns the chosen target.
    pub fn nudge<R: Rng>(&mut self, rng: &mut R, direction: Direction, now: Instant) -> i64 {
        let axis = direction.axis();
        let value = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        let current = value.value_at(now);
        let target = random_target(rng, direction, current, &self.bounds);
        debug!(
            "nudge {} from {:.1} to {}",
            direction.label(),
            current,
            target
        );
        value.animate_to(target as f64, now);
        target
    }

    /// True when `pointer` lies on the marker square at `now`
    pub fn contains(&self, pointer: Point, now: Instant) -> bool {
        let t = self.translation_at(now);
        pointer.x >= t.x
            && pointer.x <= t.x + MARKER_SIZE
            && pointer.y >= t.y
            && pointer.y <= t.y + MARKER_SIZE
    }

    /// Grab the marker if `pointer` is on it. Any running movement stops where it is.
    pub fn begin_drag(&mut self, pointer: Point, now: Instant) -> bool {
        if !self.contains(pointer, now) {
            return false;
        }
        let t = self.translation_at(now);
        self.x.set(t.x);
        self.y.set(t.y);
        self.drag_origin = t;
        self.drag.start(pointer);
        true
    }

    /// Follow the pointer while dragging. Returns true if the marker moved.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(offset) = self.drag.total_offset(pointer) else {
            return false;
        };
        self.drag.update(pointer);
        let x = self.bounds.clamp_x(self.drag_origin.x + offset.x);
        let y = self.bounds.clamp_y(self.drag_origin.y + offset.y);
        let moved = x != self.x.target() || y != self.y.target();
        self.x.set(x);
        self.y.set(y);
        moved
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Jump straight to a translation, clamped to bounds
    pub fn place(&mut self, x: f64, y: f64) {
        self.x.set(self.bounds.clamp_x(x));
        self.y.set(self.bounds.clamp_y(y));
    }

    /// Advance animations. Returns true if the translation may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let moved_x = self.x.tick(now);
        let moved_y = self.y.tick(now);
        moved_x || moved_y
    }
}
