//! Tests for console configuration loading.

use scorekeep_console::ConsoleConfig;
use scorekeep_tictactoe::Marker;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        ConsoleConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");

    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(config.default_name(Marker::X), "Player X");
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scorekeep.toml");
    fs::write(&path, "default_name_o = \"Noughts\"\n").expect("Write failed");

    let config = ConsoleConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.default_name(Marker::O), "Noughts");
    assert_eq!(config.default_name(Marker::X), "Player X");
}

#[test]
fn test_existing_file_takes_precedence_over_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scorekeep.toml");
    fs::write(&path, "log_filter = \"scorekeep_tictactoe=debug\"\n").expect("Write failed");

    let config = ConsoleConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(config.log_filter(), "scorekeep_tictactoe=debug");
    assert_eq!(config.default_name(Marker::O), "Player O");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = ConsoleConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
