//! Tests for config loading

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use wikibridge::config::Config;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write config");
    file
}

#[test]
fn test_config_from_file() {
    let file = write_config(
        r#"
[batch]
max_concurrency = 12
fail_fast = true

[output]
pretty = false

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.batch.max_concurrency, 12);
    assert!(config.batch.fail_fast);
    assert!(!config.output.pretty);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_config_file_rejects_zero_concurrency() {
    let file = write_config("[batch]\nmax_concurrency = 0\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("max_concurrency"));
}

#[test]
fn test_config_file_missing() {
    let err = Config::from_file(std::path::Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_config_file_invalid_toml() {
    let file = write_config("[batch\nmax_concurrency = ");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
#[serial]
fn test_config_from_env() {
    std::env::set_var("WIKIBRIDGE_MAX_CONCURRENCY", "3");
    std::env::set_var("WIKIBRIDGE_FAIL_FAST", "true");
    std::env::set_var("WIKIBRIDGE_LOG_FORMAT", "json");

    let config = Config::from_env().unwrap();

    std::env::remove_var("WIKIBRIDGE_MAX_CONCURRENCY");
    std::env::remove_var("WIKIBRIDGE_FAIL_FAST");
    std::env::remove_var("WIKIBRIDGE_LOG_FORMAT");

    assert_eq!(config.batch.max_concurrency, 3);
    assert!(config.batch.fail_fast);
    assert_eq!(config.logging.format, "json");
    assert!(config.output.pretty);
}

#[test]
#[serial]
fn test_config_from_env_ignores_unparsable_values() {
    std::env::set_var("WIKIBRIDGE_MAX_CONCURRENCY", "many");

    let config = Config::from_env().unwrap();

    std::env::remove_var("WIKIBRIDGE_MAX_CONCURRENCY");
    assert_eq!(config.batch.max_concurrency, 5);
}
