// Application state: marker, selection and the random source for nudges

use crate::config::PickerConfig;
use crate::marker::{Direction, Marker, Point};
use crate::selection::{LoggingObserver, SelectionObserver, SelectionTracker};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

pub struct App {
    config: PickerConfig,
    marker: Marker,
    selection: SelectionTracker,
    rng: StdRng,
    last_action: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: PickerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic nudges for a given seed
    pub fn with_seed(config: PickerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PickerConfig, rng: StdRng) -> Self {
        let duration = config.animation_duration();
        let easing = config.animation.easing;
        let mut selection = SelectionTracker::new(duration, easing);
        selection.subscribe(Box::new(LoggingObserver));
        Self {
            marker: Marker::new(config.marker_bounds(), duration, easing),
            selection,
            rng,
            last_action: "Drag the marker or press a button".to_string(),
            should_quit: false,
            config,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn selected(&self) -> u32 {
        self.selection.selected()
    }

    pub fn label_size_at(&self, now: Instant) -> f64 {
        self.selection.label_size_at(now)
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.selection.subscribe(observer);
    }

    /// One of the four buttons was pressed
    /// Nudge the marker. Ignored while the marker is held by a drag.
    pub fn press(&mut self, direction: Direction, now: Instant) {
        if self.marker.is_dragging() {
            debug!("ignoring {} while dragging", direction.label());
            return;
        }
        let target = self.marker.nudge(&mut self.rng, direction, now);
        self.last_action = format!("{} -> {}", direction.label(), target);
        self.refresh(now);
    }

    pub fn pointer_down(&mut self, pointer: Point, now: Instant) {
        if self.marker.begin_drag(pointer, now) {
            debug!("grabbed marker at ({:.0}, {:.0})", pointer.x, pointer.y);
            self.last_action = "Dragging".to_string();
            self.refresh(now);
        }
    }

    pub fn pointer_move(&mut self, pointer: Point, now: Instant) {
        if self.marker.drag_to(pointer) {
            self.refresh(now);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.marker.is_dragging() {
            self.marker.end_drag();
            self.last_action = format!("Dropped on {}", self.selected());
        }
    }

    /// Put the marker back on the first cell
    pub fn reset(&mut self, now: Instant) {
        info!("marker reset");
        self.marker.end_drag();
        self.marker.place(0.0, 0.0);
        self.last_action = "Reset".to_string();
        self.refresh(now);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations and follow the marker with the selection
    pub fn tick(&mut self, now: Instant) {
        if self.marker.tick(now) {
            self.refresh(now);
        }
        self.selection.tick(now);
    }

    fn refresh(&mut self, now: Instant) {
        let anchor = self.marker.anchor_at(now);
        self.selection.update(anchor, now);
    }
}
