//! Host configuration from environment-style lookups

use mono_tetris::config::HostConfig;
use mono_tetris::types::GRAVITY_INTERVAL_MS;

#[test]
fn test_defaults_when_unset() {
    let config = HostConfig::from_lookup(|_| None);
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.gravity_interval_ms, GRAVITY_INTERVAL_MS);
    assert!(config.auto_restart);
    assert_eq!(config.seed, None);
    assert_eq!(config.log_path, None);
}

#[test]
fn test_valid_overrides_are_applied() {
    let config = HostConfig::from_lookup(|key| match key {
        "TETRIS_SEED" => Some("42".to_string()),
        "TETRIS_GRAVITY_MS" => Some(" 250 ".to_string()),
        "TETRIS_AUTO_RESTART" => Some("off".to_string()),
        "TETRIS_LOG_PATH" => Some("/tmp/tetris.jsonl".to_string()),
        _ => None,
    });
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.resolve_seed(), 42);
    assert_eq!(config.gravity_interval_ms, 250);
    assert!(!config.auto_restart);
    assert_eq!(config.log_path.as_deref(), Some("/tmp/tetris.jsonl"));
    assert_eq!(config.game_config().gravity_interval_ms, 250);
}

#[test]
fn test_invalid_overrides_fall_back() {
    let config = HostConfig::from_lookup(|key| match key {
        "TETRIS_SEED" => Some("-3".to_string()),
        "TETRIS_GRAVITY_MS" => Some("0".to_string()),
        "TETRIS_AUTO_RESTART" => Some("sometimes".to_string()),
        "TETRIS_LOG_PATH" => Some("   ".to_string()),
        _ => None,
    });
    assert_eq!(config, HostConfig::default());
}

#[test]
fn test_game_config_is_valid() {
    let config = HostConfig::from_lookup(|_| None);
    assert!(config.game_config().validate().is_ok());
}
