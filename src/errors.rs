use crate::grid::GridError;
use std::fmt;

/// Errors surfaced by the picker outside the (total) core functions
#[derive(Debug)]
pub enum PickerError {
    /// Lookup of a cell that does not exist
    Grid(GridError),
    /// Invalid or unreadable configuration
    ConfigError(String),
    /// Terminal setup, drawing or event read failures
    TerminalError(String),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::Grid(err) => write!(f, "Grid error: {}", err),
            PickerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PickerError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickerError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for PickerError {
    fn from(err: GridError) -> Self {
        PickerError::Grid(err)
    }
}

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        PickerError::TerminalError(err.to_string())
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::ConfigError(err.to_string())
    }
}

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_wraps_with_source() {
        let err: PickerError = GridError::NumberOutOfRange(101).into();
        assert!(err.to_string().contains("101"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PickerError = json_err.into();
        assert!(matches!(err, PickerError::ConfigError(_)));
    }
}
