//! Integration tests for configuration management

use gradeplan::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.data_dir, ""); // Default empty
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADEPLAN/test.log"

[paths]
data_dir = "$GRADEPLAN/data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("gradeplan"));
    assert!(!config.logging.file.contains("$GRADEPLAN"));
    assert!(config.paths.data_dir.contains("gradeplan"));
    assert!(!config.paths.data_dir.contains("$GRADEPLAN"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("data_dir", "/custom/data")
        .expect("Failed to set data_dir");
    assert_eq!(config.get("data_dir").unwrap(), "/custom/data");
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("no_such_key", "value").is_err());
}

#[test]
fn test_config_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("no_such_key", &defaults).is_err());
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[paths]
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    // Explicitly set value is kept, empty ones are filled in
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/override.log".to_string()),
        verbose: Some(true),
        data_dir: Some("/override/data".to_string()),
        reports_dir: Some("/override/reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/override.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "/override/data");
    assert_eq!(config.paths.reports_dir, "/override/reports");
}

#[test]
fn test_apply_empty_overrides_changes_nothing() {
    let mut config = Config::from_defaults();
    let before_level = config.logging.level.clone();
    let before_data_dir = config.paths.data_dir.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.logging.level, before_level);
    assert_eq!(config.paths.data_dir, before_data_dir);
}

#[test]
fn test_course_snapshot_path_lives_in_data_dir() {
    let mut config = Config::from_defaults();
    config
        .set("data_dir", "/custom/data")
        .expect("Failed to set data_dir");

    let snapshot = config.course_snapshot_path();

    assert_eq!(
        snapshot,
        std::path::PathBuf::from("/custom/data/courses.toml")
    );
}
