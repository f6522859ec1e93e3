//! Integration tests for configuration management

use cgpa_calc::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        config.store.data_file.ends_with("students.toml"),
        "Default data file should be a students TOML file"
    );
    assert!(!config.store.data_file.contains("$CGPA_CALC"));
    assert!(!config.paths.reports_dir.is_empty());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[store]
data_file = "/tmp/records.toml"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.store.data_file, "/tmp/records.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.store.data_file, "");
    assert_eq!(config.paths.reports_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CGPA_CALC/cgpacalc.log"

[store]
data_file = "$CGPA_CALC/students.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("cgpacalc"));
    assert!(!config.logging.file.contains("$CGPA_CALC"));
    let expected = Config::get_cgpacalc_dir().join("students.toml");
    assert_eq!(PathBuf::from(&config.store.data_file), expected);
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config
        .set("data-file", "/srv/records.toml")
        .expect("Failed to set data file");
    assert_eq!(config.get("data_file").unwrap(), "/srv/records.toml");

    config.set("reports_dir", "/srv/out").unwrap();
    assert_eq!(config.get("reports-dir").unwrap(), "/srv/out");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("data_file", "/elsewhere.toml").unwrap();
    config
        .unset("data_file", &defaults)
        .expect("Failed to unset data_file");
    assert_eq!(config.store.data_file, defaults.store.data_file);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_serialized_round_trip_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").unwrap();
    config.set("data_file", "/data/students.toml").unwrap();

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.store.data_file, "/data/students.toml");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("$CGPA_CALC/other.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert!(config.store.data_file.ends_with("other.toml"));
    assert!(!config.store.data_file.contains("$CGPA_CALC"));
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let data_file = config.store.data_file.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.store.data_file, data_file);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[store]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("data_file"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.store.data_file, defaults.store.data_file);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[store]
data_file = "/my/students.toml"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.store.data_file, "/my/students.toml");
}

#[test]
fn test_get_cgpacalc_dir() {
    let dir = Config::get_cgpacalc_dir();
    assert!(dir.ends_with("cgpacalc"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    assert!(path.starts_with(Config::get_cgpacalc_dir()));
}
