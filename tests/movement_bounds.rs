//! Random nudges never leave their interval, and the marker never leaves the screen
use grid_picker::marker::{random_target, target_interval};
use grid_picker::{Direction, Marker, MarkerBounds, PickerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

#[test]
fn left_and_up_land_between_zero_and_current() {
    let bounds = MarkerBounds::for_screen(390.0);
    let mut rng = StdRng::seed_from_u64(2024);
    for current in [0.0, 12.0, 150.9, 315.0] {
        for _ in 0..200 {
            let left = random_target(&mut rng, Direction::Left, current, &bounds);
            assert!((0..=current.floor() as i64).contains(&left));
            let up = random_target(&mut rng, Direction::Up, current, &bounds);
            assert!((0..=current.floor() as i64).contains(&up));
        }
    }
}

#[test]
fn right_and_down_land_between_current_and_edge() {
    let bounds = MarkerBounds::for_screen(414.0);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let right = random_target(&mut rng, Direction::Right, 100.0, &bounds);
        assert!((100..=339).contains(&right));
        let down = random_target(&mut rng, Direction::Down, 100.0, &bounds);
        assert!((100..=315).contains(&down));
    }
    assert_eq!(target_interval(Direction::Right, 339.0, &bounds), (339, 339));
}

#[test]
fn repeated_nudges_keep_marker_on_screen() {
    let config = PickerConfig::default();
    let bounds = config.marker_bounds();
    let mut marker = Marker::new(bounds, config.animation_duration(), config.animation.easing);
    let mut rng = StdRng::seed_from_u64(17);
    let mut now = Instant::now();

    for step in 0..400 {
        let direction = Direction::ALL[step % 4];
        marker.nudge(&mut rng, direction, now);
        // Interrupt half of the moves midway
        now += Duration::from_millis(if step % 2 == 0 { 350 } else { 1000 });
        marker.tick(now);
        let t = marker.translation_at(now);
        assert!(t.x >= 0.0 && t.x <= bounds.max_x, "x = {}", t.x);
        assert!(t.y >= 0.0 && t.y <= bounds.max_y, "y = {}", t.y);
    }
}
