//! OUTLINE_* environment overrides.
//!
//! Kept in its own test binary: the variables are process-global, so a single
//! test sets and clears them in sequence.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use outline::config::Settings;
use outline::domain::MatchMode;

#[test]
fn given_outline_env_vars_when_load_from_then_env_wins_over_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("outline.toml");
    let env_data_dir = dir.path().join("from-env");
    fs::write(
        &config_path,
        "data_dir = \"/from/file\"\nmatch_mode = \"suffix\"\n",
    )
    .unwrap();
    std::env::set_var("OUTLINE_DATA_DIR", &env_data_dir);
    std::env::set_var("OUTLINE_MATCH_MODE", "extension");

    // Act
    let settings = Settings::load_from(Some(&config_path));
    std::env::remove_var("OUTLINE_DATA_DIR");
    std::env::remove_var("OUTLINE_MATCH_MODE");

    // Assert
    let settings = settings.unwrap();
    assert_eq!(settings.data_dir, env_data_dir);
    assert_eq!(settings.match_mode, MatchMode::Extension);

    // Without the variables the file values apply again
    let settings = Settings::load_from(Some(&config_path)).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from("/from/file"));
    assert_eq!(settings.match_mode, MatchMode::Suffix);

    // An unknown match mode is a config error
    std::env::set_var("OUTLINE_MATCH_MODE", "fuzzy");
    let result = Settings::load_from(Some(&config_path));
    std::env::remove_var("OUTLINE_MATCH_MODE");
    assert!(result.is_err());
}
