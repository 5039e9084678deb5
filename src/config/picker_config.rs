use crate::errors::{PickerError, PickerResult};
use crate::marker::{EasingType, MarkerBounds};
use crate::{DEFAULT_ANIMATION_MS, MARKER_EDGE_OFFSET};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime configuration for the picker. Grid geometry is fixed and not part of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub screen: ScreenConfig,
    pub animation: AnimationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Virtual screen the marker moves on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen width in pixels; bounds horizontal travel
    pub width: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 390.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of marker and label transitions (ms)
    pub duration_ms: u64,
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_MS,
            easing: EasingType::EaseInOutQuad,
        }
    }
}

/// Terminal presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Event poll / redraw interval (ms)
    pub tick_ms: u64,
    /// Pixels covered by one terminal column
    pub px_per_col: f64,
    /// Pixels covered by one terminal row
    pub px_per_row: f64,
    /// Prompt shown above the selected number
    pub question: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            px_per_col: 7.0,
            px_per_row: 17.5,
            question: "What is your age?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    /// Log file; without one only errors reach stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl PickerConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PickerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PickerError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: PickerConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PickerResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|e| {
            PickerError::ConfigError(format!("cannot write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Apply environment overrides on top of `self`
    pub fn with_env(mut self) -> Self {
        self.apply_env(|key| std::env::var(key).ok());
        self
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        if let Some(width) = var("GRID_PICKER_SCREEN_WIDTH").and_then(|v| v.parse().ok()) {
            self.screen.width = width;
        }
        if let Some(ms) = var("GRID_PICKER_ANIMATION_MS").and_then(|v| v.parse().ok()) {
            self.animation.duration_ms = ms;
        }
        if let Some(ms) = var("GRID_PICKER_TICK_MS").and_then(|v| v.parse().ok()) {
            self.display.tick_ms = ms;
        }
        if let Some(question) = var("GRID_PICKER_QUESTION") {
            self.display.question = question;
        }
        if let Some(file) = var("GRID_PICKER_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation.duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.display.tick_ms)
    }

    pub fn marker_bounds(&self) -> MarkerBounds {
        MarkerBounds::for_screen(self.screen.width)
    }

    /// Validate configuration values
    pub fn validate(&self) -> PickerResult<()> {
        if self.screen.width.is_nan() || self.screen.width <= MARKER_EDGE_OFFSET {
            return Err(PickerError::ConfigError(format!(
                "screen width must exceed {} px",
                MARKER_EDGE_OFFSET
            )));
        }
        if self.animation.duration_ms == 0 {
            return Err(PickerError::ConfigError(
                "animation duration must be positive".to_string(),
            ));
        }
        if self.display.tick_ms == 0 {
            return Err(PickerError::ConfigError(
                "tick interval must be positive".to_string(),
            ));
        }
        let scale_ok = |px: f64| px.is_finite() && px > 0.0;
        if !scale_ok(self.display.px_per_col) || !scale_ok(self.display.px_per_row) {
            return Err(PickerError::ConfigError(
                "terminal scale must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
