/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use vttscrub::app_config::{CleanerConfig, Config, LogLevel, OutputConfig};
use vttscrub::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.cleaner.recency_window, 20);
    assert_eq!(config.cleaner.header_prefixes, vec!["WEBVTT", "Kind:", "Language:"]);
    assert_eq!(config.output.extension, "txt");
    assert_eq!(config.output.concurrent_files, 4);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.cleaner.recency_window = 0;
    assert_eq!(config.validate(), Err(ConfigError::InvalidRecencyWindow(0)));
    config.cleaner.recency_window = 20;

    config.cleaner.header_prefixes.push(String::new());
    assert_eq!(config.validate(), Err(ConfigError::EmptyHeaderPrefix));
    config.cleaner = CleanerConfig::default();

    config.output.concurrent_files = 0;
    assert_eq!(config.validate(), Err(ConfigError::InvalidConcurrency(0)));
    config.output.concurrent_files = 2;

    config.output.extension = ".".to_string();
    assert_eq!(config.validate(), Err(ConfigError::EmptyExtension));
    config.output = OutputConfig::default();

    assert!(config.validate().is_ok());
}

/// Test that an empty header prefix list is allowed
#[test]
fn test_config_validation_withNoHeaderPrefixes_shouldPass() {
    let mut config = Config::default();
    config.cleaner.header_prefixes.clear();
    assert!(config.validate().is_ok());
}

/// Test JSON round trip through save and load
#[test]
fn test_config_save_and_load_withCustomValues_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.cleaner.recency_window = 35;
    config.output.extension = "md".to_string();
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded, config);

    Ok(())
}

/// Test that partial config files pick up defaults
#[test]
fn test_config_load_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output": { "extension": "log" }, "log_level": "warn" }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.output.extension, "log");
    assert_eq!(config.output.concurrent_files, 4);
    assert_eq!(config.cleaner, CleanerConfig::default());
    assert_eq!(config.log_level, LogLevel::Warn);

    Ok(())
}

/// Test that invalid JSON is reported with the file path
#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{}", err).contains("Failed to parse config file"));

    Ok(())
}
