//! Tests for loading the TOML config.

use hotseat::{HotseatConfig, Theme};
use ratatui::style::Color;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HotseatConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, HotseatConfig::default());
    assert_eq!(config.theme().unwrap(), Theme::default());
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\nx_color = \"yellow\"\nhighlight_color = \"magenta\""
    )
    .unwrap();

    let config = HotseatConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug");

    let theme = config.theme().unwrap();
    assert_eq!(theme.x, Color::Yellow);
    assert_eq!(theme.o, Color::Red);
    assert_eq!(theme.highlight, Color::Magenta);
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_color = [").unwrap();
    let err = HotseatConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_invalid_color_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_color = \"plaid\"").unwrap();
    let err = HotseatConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("x_color"));
}
