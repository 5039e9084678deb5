// Timed scalar transitions
// Every read takes an explicit `now` so the event loop and the tests share one clock.

use crate::marker::easing::EasingType;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub start_time: Instant,
    pub duration: Duration,
    pub easing: EasingType,
}

impl Animation {
    pub fn new(
        from: f64,
        to: f64,
        start_time: Instant,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing,
        }
    }

    /// Get the animation progress (0.0 to 1.0) at `now`
    pub fn progress_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if self.duration.is_zero() || elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Get the interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// A value that is either settled or running an animation toward a target
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    settled: f64,
    animation: Option<Animation>,
    duration: Duration,
    easing: EasingType,
}

impl AnimatedValue {
    pub fn new(value: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            settled: value,
            animation: None,
            duration,
            easing,
        }
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        match &self.animation {
            Some(animation) => animation.value_at(now),
            None => self.settled,
        }
    }

    /// Final value once any running animation completes
    pub fn target(&self) -> f64 {
        match &self.animation {
            Some(animation) => animation.to,
            None => self.settled,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start animating toward `target`. A running animation is replaced and the
    /// new one starts from the live value at `now`.
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        let from = self.value_at(now);
        self.animation = Some(Animation::new(from, target, now, self.duration, self.easing));
    }

    /// Jump to `value`, cancelling any running animation
    pub fn set(&mut self, value: f64) {
        self.settled = value;
        self.animation = None;
    }

    /// Settle a finished animation. Returns true while the value is in motion
    /// (or just reached its target).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };
        if animation.is_complete_at(now) {
            self.settled = animation.to;
            self.animation = None;
        }
        true
    }
}
