//! Host configuration from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (default: derived from the clock)
//! - `TETRIS_GRAVITY_MS`: gravity interval in milliseconds (default: 800)
//! - `TETRIS_AUTO_RESTART`: start a new round right after game over (default: true)
//! - `TETRIS_LOG_PATH`: append JSON-lines logs to this file (default: off)
//!
//! Missing or malformed values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub seed: Option<u32>,
    pub gravity_interval_ms: u32,
    pub auto_restart: bool,
    pub log_path: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            auto_restart: true,
            log_path: None,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let gravity_interval_ms = lookup("TETRIS_GRAVITY_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.gravity_interval_ms);

        let auto_restart = lookup("TETRIS_AUTO_RESTART")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.auto_restart);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            gravity_interval_ms,
            auto_restart,
            log_path,
        }
    }

    /// Configured seed, or one taken from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            gravity_interval_ms: self.gravity_interval_ms,
            ..GameConfig::default()
        }
    }
}
