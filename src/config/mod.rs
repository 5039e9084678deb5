// Configuration module
pub mod picker_config;

pub use picker_config::{AnimationConfig, DisplayConfig, LoggingConfig, PickerConfig, ScreenConfig};
