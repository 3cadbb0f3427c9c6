use std::fs;
use std::path::Path;

use rate_content::{AddonConfigLoader, RateFileError, RateFileLoader};
use tempfile::TempDir;

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

#[test]
fn test_bundled_rate_file_loads() {
    let table = RateFileLoader::load(&data_dir().join("dynamic_rate.json"), 65).unwrap();

    assert_eq!(table.len(), 8);
    assert_eq!(table.lookup(1, false), 3.0);
    assert_eq!(table.lookup(1, true), 4.0);
    // lv 20 has no premium rate
    assert_eq!(table.lookup(20, true), 2.0);
    assert_eq!(table.lookup(2, false), 1.0);
}

#[test]
fn test_bundled_addon_config_loads() {
    let config = AddonConfigLoader::load(&data_dir().join("addon.toml")).unwrap();

    assert!(config.activated);
    assert_eq!(config.max_lv, Some(65));
    assert_eq!(config.base_default_exp_rate, Some(1.0));
    assert!(config.config_path.ends_with("dynamic_rate.json"));
}

#[test]
fn test_lower_max_level_filters_records() {
    let table = RateFileLoader::load(&data_dir().join("dynamic_rate.json"), 30).unwrap();

    let levels: Vec<i32> = table.records().map(|r| r.level).collect();
    assert_eq!(levels, vec![1, 10, 20, 30]);
}

#[test]
fn test_missing_rate_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = RateFileLoader::load(&temp_dir.path().join("absent.json"), 65).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_corrupted_rate_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rates.json");
    fs::write(&path, "not json at all").unwrap();

    let err = RateFileLoader::load(&path, 65).unwrap_err();
    assert!(matches!(err, RateFileError::Parse(_)));
}

#[test]
fn test_json_addon_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("addon.json");
    fs::write(
        &path,
        r#"{ "activated": true, "flush_logs": false, "config_path": "r.json" }"#,
    )
    .unwrap();

    let config = AddonConfigLoader::load(&path).unwrap();
    assert!(config.activated);
    assert!(!config.flush_logs);
    assert_eq!(config.config_path, Path::new("r.json"));
}

#[test]
fn test_missing_addon_config_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(AddonConfigLoader::load(&temp_dir.path().join("addon.toml")).is_err());
}
