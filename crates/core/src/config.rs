//! Engine configuration, fixed at construction.

use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_INTERVAL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Time between forced downward moves.
    pub gravity_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::InvalidGravity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = GameConfig {
            board_height: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_zero_gravity_rejected() {
        let config = GameConfig {
            gravity_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGravity));
    }
}
