//! End-to-end flows through the app: buttons, drags and the selection observer
use grid_picker::app::App;
use grid_picker::marker::Point;
use grid_picker::{Direction, PickerConfig, SelectionObserver};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Changes(Rc<RefCell<Vec<u32>>>);

impl SelectionObserver for Changes {
    fn on_selection_changed(&mut self, _previous: u32, current: u32) {
        self.0.borrow_mut().push(current);
    }
}

#[test]
fn selection_follows_animation_frame_by_frame() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut app = App::with_seed(PickerConfig::default(), 3);
    app.subscribe(Box::new(Changes(seen.clone())));

    let start = Instant::now();
    app.press(Direction::Right, start);
    for frame in 1..=70 {
        app.tick(start + Duration::from_millis(frame * 16));
    }

    let end = start + Duration::from_millis(1200);
    app.tick(end);
    let anchor = app.marker().anchor_at(end);
    assert_eq!(app.selected(), grid_picker::resolve(anchor.x, anchor.y));
    // Moving right along the first row only ever selects cells 1..=10
    assert!(seen.borrow().iter().all(|n| (1..=10).contains(n)));
    assert_eq!(seen.borrow().last().copied().unwrap_or(1), app.selected());
}

#[test]
fn interrupted_move_restarts_from_live_position() {
    let mut app = App::with_seed(PickerConfig::default(), 8);
    let start = Instant::now();
    app.press(Direction::Down, start);

    let midway = start + Duration::from_millis(400);
    app.tick(midway);
    let live = app.marker().translation_at(midway);
    app.press(Direction::Up, midway);

    assert_eq!(app.marker().translation_at(midway), live);
    let done = midway + Duration::from_millis(1000);
    app.tick(done);
    let settled = app.marker().translation_at(done);
    assert!(settled.y >= 0.0 && settled.y <= live.y.floor());
}

#[test]
fn label_size_converges_on_selected_number() {
    let mut app = App::with_seed(PickerConfig::default(), 4);
    let now = Instant::now();
    app.pointer_down(Point::new(1.0, 1.0), now);
    app.pointer_move(Point::new(316.0, 316.0), now);
    app.pointer_up();
    assert_eq!(app.selected(), 100);

    let later = now + Duration::from_millis(1000);
    app.tick(later);
    assert_eq!(app.label_size_at(later), 100.0);
}
