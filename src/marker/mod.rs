// Marker module - the draggable square, its animations and the four nudge moves

pub mod animation;
pub mod drag;
pub mod easing;
pub mod movement;
pub mod state;

// Re-export main types
pub use animation::{AnimatedValue, Animation};
pub use drag::{DragState, Point};
pub use easing::EasingType;
pub use movement::{random_target, target_interval, Axis, Direction, MarkerBounds};
pub use state::Marker;
