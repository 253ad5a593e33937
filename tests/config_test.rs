//! Integration tests for layered Settings loading.
//!
//! Layers: compiled defaults, then a config file. Environment overrides live
//! in `config_env_test.rs` so they never race these tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use outline::config::Settings;
use outline::domain::MatchMode;
use outline::infrastructure::di::ServiceContainer;

#[test]
fn given_config_file_when_load_from_then_file_values_apply() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("outline.toml");
    let data_dir = dir.path().join("lists");
    fs::write(
        &config_path,
        format!(
            "data_dir = \"{}\"\nmatch_mode = \"extension\"\n",
            data_dir.display()
        ),
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&config_path)).unwrap();

    // Assert
    assert_eq!(settings.data_dir, data_dir);
    assert_eq!(settings.match_mode, MatchMode::Extension);
}

#[test]
fn given_absent_config_file_when_load_from_then_defaults_apply() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(&dir.path().join("missing.toml"))).unwrap();

    assert!(!settings.data_dir.as_os_str().is_empty());
}

#[test]
fn given_loaded_settings_when_wiring_container_then_manager_uses_data_dir() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        data_dir: PathBuf::from(dir.path()),
        match_mode: MatchMode::Suffix,
    };

    let container = ServiceContainer::new(settings);
    let mut manager = container.entry_manager();
    manager.load().unwrap();
    manager.add_entry("Fruit");
    manager.save().unwrap();

    assert!(dir.path().join("Fruit.json").is_file());
}
