//! Tests for the config module

use super::types::*;
use super::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.storage.data_dir, PathBuf::from("."));
    assert_eq!(config.storage.assets_path(), Path::new(".").join("assets.csv"));
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.log.filter, "warn");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[storage]
data_dir = "/srv/inventory"
assets_file = "things.csv"

[output]
format = "json"

[log]
filter = "assetkeep=debug"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(
        config.storage.assets_path(),
        PathBuf::from("/srv/inventory/things.csv")
    );
    assert_eq!(
        config.storage.categories_path(),
        PathBuf::from("/srv/inventory/categories.csv")
    );
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.log.filter, "assetkeep=debug");
}

#[test]
fn test_config_empty_file_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetkeep.toml");
    fs::write(
        &path,
        r#"
[storage]
data_dri = "data"
"#,
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.storage.data_dir, PathBuf::from("."));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "data_dri");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("data_dir"));
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetkeep.toml");
    fs::write(&path, "[storage\ndata_dir = ").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let err = Config::load(Path::new("/nonexistent/assetkeep.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_output_format_from_name() {
    assert_eq!(OutputFormat::from_name("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Text);
}
