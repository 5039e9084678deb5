// Selected number tracking
//
// The selected number is derived from the marker anchor and recomputed on every
// position change. The label size follows the number through its own animation.

use crate::grid::resolve;
use crate::marker::{AnimatedValue, EasingType, Point};
use log::info;
use std::time::{Duration, Instant};

/// Receives a callback whenever the selected number changes
pub trait SelectionObserver {
    fn on_selection_changed(&mut self, previous: u32, current: u32);
}

/// Logs every selection change at info level
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl SelectionObserver for LoggingObserver {
    fn on_selection_changed(&mut self, previous: u32, current: u32) {
        info!("selected number {} -> {}", previous, current);
    }
}

pub struct SelectionTracker {
    selected: u32,
    label_size: AnimatedValue,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionTracker {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            selected: 1,
            label_size: AnimatedValue::new(1.0, duration, easing),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    /// Animated label size; converges on the selected number
    pub fn label_size_at(&self, now: Instant) -> f64 {
        self.label_size.value_at(now)
    }

    /// Recompute the selection for the marker anchor. Returns the new number
    /// when it changed.
    pub fn update(&mut self, anchor: Point, now: Instant) -> Option<u32> {
        let number = resolve(anchor.x, anchor.y);
        if number == self.selected {
            return None;
        }
        let previous = self.selected;
        self.selected = number;
        self.label_size.animate_to(number as f64, now);
        for observer in self.observers.iter_mut() {
            observer.on_selection_changed(previous, number);
        }
        Some(number)
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.label_size.tick(now)
    }
}

impl std::fmt::Debug for SelectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("selected", &self.selected)
            .field("label_size", &self.label_size)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<(u32, u32)>>>);

    impl SelectionObserver for Recorder {
        fn on_selection_changed(&mut self, previous: u32, current: u32) {
            self.0.borrow_mut().push((previous, current));
        }
    }

    fn tracker() -> SelectionTracker {
        SelectionTracker::new(Duration::from_millis(1000), EasingType::Linear)
    }

    #[test]
    fn test_initial_selection() {
        let tracker = tracker();
        assert_eq!(tracker.selected(), 1);
        assert_eq!(tracker.label_size_at(Instant::now()), 1.0);
    }

    #[test]
    fn test_update_notifies_on_change_only() {
        let now = Instant::now();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = tracker();
        tracker.subscribe(Box::new(Recorder(seen.clone())));

        assert_eq!(tracker.update(Point::new(25.0, 25.0), now), None);
        assert_eq!(tracker.update(Point::new(165.0, 130.0), now), Some(35));
        assert_eq!(tracker.update(Point::new(166.0, 131.0), now), None);
        assert_eq!(tracker.update(Point::new(340.0, 340.0), now), Some(100));

        assert_eq!(*seen.borrow(), vec![(1, 35), (35, 100)]);
    }

    #[test]
    fn test_label_size_animates_toward_number() {
        let start = Instant::now();
        let mut tracker = tracker();
        tracker.update(Point::new(165.0, 130.0), start);

        let halfway = tracker.label_size_at(start + Duration::from_millis(500));
        assert!((halfway - 18.0).abs() < 1e-6);

        let done = start + Duration::from_millis(1000);
        assert!(tracker.tick(done));
        assert_eq!(tracker.label_size_at(done), 35.0);
        assert!(!tracker.tick(done));
    }
}
