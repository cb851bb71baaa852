//! Construction-time errors.
//!
//! Illegal moves are plain `bool` results and game over is a state, so the only
//! failures surfaced to callers are misconfigurations found before play starts.

use std::fmt;

/// Rejected engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDimensions { width: u8, height: u8 },
    InvalidGravity,
    EmptyCatalog,
    CatalogTooLarge { len: usize },
    ShapeTooWide { shape_width: u8, board_width: u8 },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::InvalidDimensions { .. } => "invalid_dimensions",
            ConfigError::InvalidGravity => "invalid_gravity",
            ConfigError::EmptyCatalog | ConfigError::CatalogTooLarge { .. } => "invalid_catalog",
            ConfigError::ShapeTooWide { .. } => "shape_too_wide",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::InvalidDimensions { .. } => "board dimensions must be positive",
            ConfigError::InvalidGravity => "gravity interval must be positive",
            ConfigError::EmptyCatalog => "shape catalog is empty",
            ConfigError::CatalogTooLarge { .. } => "shape catalog holds more shapes than supported",
            ConfigError::ShapeTooWide { .. } => "shape is wider than the board",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        match self {
            ConfigError::InvalidDimensions { width, height } => write!(f, ", got {width}x{height}"),
            ConfigError::CatalogTooLarge { len } => write!(f, " ({len})"),
            ConfigError::ShapeTooWide {
                shape_width,
                board_width,
            } => write!(f, " ({shape_width} > {board_width})"),
            ConfigError::InvalidGravity | ConfigError::EmptyCatalog => Ok(()),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rejected shape matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    TooLarge { width: usize, height: usize },
    Ragged { row: usize },
    NoFilledCells,
}

impl ShapeError {
    pub fn code(self) -> &'static str {
        match self {
            ShapeError::Empty => "empty",
            ShapeError::TooLarge { .. } => "too_large",
            ShapeError::Ragged { .. } => "ragged",
            ShapeError::NoFilledCells => "no_filled_cells",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ShapeError::Empty => "shape has no rows",
            ShapeError::TooLarge { .. } => "shape bounding box exceeds 4x4",
            ShapeError::Ragged { .. } => "shape rows differ in length",
            ShapeError::NoFilledCells => "shape has no filled cells",
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        match self {
            ShapeError::TooLarge { width, height } => write!(f, ", got {width}x{height}"),
            ShapeError::Ragged { row } => write!(f, " at row {row}"),
            ShapeError::Empty | ShapeError::NoFilledCells => Ok(()),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        assert_eq!(ConfigError::EmptyCatalog.code(), "invalid_catalog");
        assert_eq!(ConfigError::EmptyCatalog.message(), "shape catalog is empty");
        assert_eq!(
            ConfigError::InvalidDimensions {
                width: 0,
                height: 8
            }
            .to_string(),
            "board dimensions must be positive, got 0x8"
        );
        assert_eq!(ConfigError::InvalidGravity.to_string(), "gravity interval must be positive");
    }

    #[test]
    fn test_shape_error_codes() {
        assert_eq!(ShapeError::Empty.code(), "empty");
        assert_eq!(ShapeError::Ragged { row: 1 }.code(), "ragged");
        assert_eq!(ShapeError::NoFilledCells.message(), "shape has no filled cells");
        assert_eq!(
            ShapeError::TooLarge {
                width: 5,
                height: 1
            }
            .to_string(),
            "shape bounding box exceeds 4x4, got 5x1"
        );
        assert_eq!(
            ShapeError::Ragged { row: 2 }.to_string(),
            "shape rows differ in length at row 2"
        );
    }
}
