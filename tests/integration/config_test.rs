//! Integration tests for loading and saving configuration files.

use fittrack::report::OutputFormat;
use fittrack::runner::{FailurePolicy, Package, Runner};
use fittrack::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.packages.len(), 3);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.output.format = OutputFormat::Csv;
    config.batch.on_failure = FailurePolicy::Skip;
    config.packages = vec![Package::new("WLK", vec![6000.0, 0.75, 64.0, 168.0])];

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_configured_packages_drive_runner() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[output]
format = "text"

[[packages]]
code = "RUN"
data = [15000, 1, 75]

[[packages]]
code = "SWM"
data = [720, 1, 80, 25, 40]
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let runner = Runner::new(config.output.format, config.batch.on_failure);
    let mut out = Vec::new();
    let report = runner.run(&config.packages, &mut out).unwrap();

    assert_eq!(report.written(), 2);
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("Workout type: Running;"));
}
