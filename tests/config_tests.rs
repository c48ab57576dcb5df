//! Configuration resolution tests.
//!
//! These tests mutate process-global environment variables, so every case
//! runs inside `with_scoped_env`, which serializes access and restores the
//! previous values.

mod support;

use std::io::Write;

use lfcgm_rust::config::{
    AppConfig, DEFAULT_DROPDOWN_CSV, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCORERS_CSV,
};
use support::with_scoped_env;

/// All variables cleared, with selected overrides applied on top.
fn env_with<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes: Vec<(&str, Option<&str>)> = vec![
        ("LFCGM_CONFIG", None),
        ("LFCGM_SCORERS_CSV", None),
        ("LFCGM_DROPDOWN_CSV", None),
        ("HOST", None),
        ("PORT", None),
    ];
    for &(key, value) in overrides {
        if let Some(entry) = changes.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = Some(value);
        }
    }
    changes
}

#[test]
fn test_defaults_with_no_environment() {
    let config = with_scoped_env(&env_with(&[]), || AppConfig::from_env().unwrap());

    assert_eq!(config.scorers_csv.to_str(), Some(DEFAULT_SCORERS_CSV));
    assert_eq!(config.dropdown_csv.to_str(), Some(DEFAULT_DROPDOWN_CSV));
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_environment_overrides() {
    let changes = env_with(&[
        ("LFCGM_SCORERS_CSV", "fixtures/scorers.csv"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
    ]);

    let config = with_scoped_env(&changes, || AppConfig::from_env().unwrap());

    assert_eq!(config.scorers_csv.to_str(), Some("fixtures/scorers.csv"));
    assert_eq!(config.dropdown_csv.to_str(), Some(DEFAULT_DROPDOWN_CSV));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_invalid_port_is_an_error() {
    let changes = env_with(&[("PORT", "not-a-port")]);

    let result = with_scoped_env(&changes, AppConfig::from_env);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("PORT"));
}

#[test]
fn test_settings_file_supplies_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "[data]\nscorers_csv = \"from_file/scorers.csv\"\n\n[server]\nport = 9000\n"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_with(&[("LFCGM_CONFIG", &path)]);
    let config = with_scoped_env(&changes, || AppConfig::from_env().unwrap());

    assert_eq!(config.scorers_csv.to_str(), Some("from_file/scorers.csv"));
    assert_eq!(config.port, 9000);
    // Settings the file does not name keep their built-in defaults.
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.dropdown_csv.to_str(), Some(DEFAULT_DROPDOWN_CSV));
}

#[test]
fn test_environment_beats_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[server]\nport = 9000\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_with(&[("LFCGM_CONFIG", &path), ("PORT", "8080")]);
    let config = with_scoped_env(&changes, || AppConfig::from_env().unwrap());
    assert_eq!(config.port, 8080);
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let changes = env_with(&[("LFCGM_CONFIG", "no/such/file.toml")]);

    let result = with_scoped_env(&changes, AppConfig::from_env);
    assert!(result.is_err());
}
