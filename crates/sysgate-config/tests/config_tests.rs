// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the sysgate configuration system.

use sysgate_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[gateway]
log_level = "debug"
timeout_secs = 10
allow_destructive = true

[paths]
sysinternals = "C:/Tools/SysinternalsSuite"
x64 = "C:/Tools/x64"
catalog = "catalog.json"
schemas = "tool-schemas"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.gateway.log_level, "debug");
    assert_eq!(config.gateway.timeout_secs, 10);
    assert!(config.gateway.allow_destructive);
    assert_eq!(
        config.paths.sysinternals.as_deref(),
        Some("C:/Tools/SysinternalsSuite")
    );
    assert_eq!(config.paths.x64.as_deref(), Some("C:/Tools/x64"));
    assert_eq!(config.paths.catalog, "catalog.json");
    assert_eq!(config.paths.schemas, "tool-schemas");
}

/// Unknown keys are rejected at parse time, not silently ignored.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[gateway]
timout_secs = 10
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("timout_secs"),
        "error should mention the unrecognized key, got: {err_str}"
    );
}

/// An empty config file is valid and yields fail-closed defaults.
#[test]
fn empty_config_validates_with_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert!(!config.gateway.allow_destructive);
    assert_eq!(config.gateway.timeout_secs, 30);
}

/// Semantic validation failures surface through load_and_validate.
#[test]
fn invalid_values_fail_validation() {
    let toml = r#"
[gateway]
timeout_secs = 0
log_level = "shouty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
}

/// Wrong value types fail at the figment layer.
#[test]
fn wrong_type_produces_load_error() {
    let toml = r#"
[gateway]
timeout_secs = "thirty"
"#;

    assert!(load_config_from_str(toml).is_err());
}
