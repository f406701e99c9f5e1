//! Tests for loading the play configuration.

use std::io::Write;
use unbeatable_tictactoe::PlayConfig;

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(config.log_filter(), "warn");
    assert!(*config.show_hints());
    assert_eq!(config.human_name(), "You");
}

#[test]
fn test_from_file_fills_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_name = \"Ada\"\nshow_hints = false").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(config.human_name(), "Ada");
    assert!(!*config.show_hints());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = \"sometimes\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlayConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PlayConfig::default());
}
