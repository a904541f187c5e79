//! Integration tests for Settings layered loading.
//!
//! These tests pass explicit global paths inside temp directories, so the
//! user's real global config never leaks in.

use std::fs;

use tempfile::TempDir;

use cursorkit::application::ApplicationError;
use cursorkit::config::Settings;
use cursorkit::Storage;

// ============================================================
// Layer precedence
// ============================================================

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("cursorkit.toml");
    fs::write(&global, "array_capacity = 8\nstorage = \"list\"\n").unwrap();

    let settings = Settings::load_layers(Some(&global), None).expect("load settings");

    assert_eq!(settings.array_capacity, 8);
    assert_eq!(settings.storage, Storage::List);
    assert_eq!(settings.min_price, 200.0, "unspecified values keep defaults");
}

#[test]
fn given_global_and_file_when_load_then_file_wins() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("cursorkit.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "array_capacity = 8\nmin_price = 10.0\n").unwrap();
    fs::write(&local, "min_price = 99.5\nlog_prefix = \"seen\"\n").unwrap();

    let settings = Settings::load_layers(Some(&global), Some(&local)).expect("load settings");

    assert_eq!(settings.array_capacity, 8, "global value survives");
    assert_eq!(settings.min_price, 99.5, "file overrides global");
    assert_eq!(settings.log_prefix, "seen");
}

#[test]
fn given_missing_global_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("absent.toml");

    let settings = Settings::load_layers(Some(&global), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

// ============================================================
// Failures
// ============================================================

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("absent.toml");

    let result = Settings::load_layers(None, Some(&local));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("bad.toml");
    fs::write(&local, "array_capacity = \"many\"\n").unwrap();

    let result = Settings::load_layers(None, Some(&local));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_zero_capacity_when_load_then_rejected() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("zero.toml");
    fs::write(&local, "array_capacity = 0\n").unwrap();

    let result = Settings::load_layers(None, Some(&local));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_template_when_parsed_then_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("template.toml");
    fs::write(&local, Settings::template()).unwrap();

    let settings = Settings::load_layers(None, Some(&local)).expect("template parses");

    assert_eq!(settings, Settings::default());
}
