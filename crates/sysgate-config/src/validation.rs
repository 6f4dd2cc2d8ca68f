// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a positive timeout and a recognized log level.

use thiserror::Error;

use crate::model::SysgateConfig;

/// A configuration error surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment-level parse or merge failure.
    #[error("failed to load configuration: {0}")]
    Load(String),

    /// A semantic constraint was violated.
    #[error("{message}")]
    Validation { message: String },
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &SysgateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.gateway.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.timeout_secs must be at least 1".to_string(),
        });
    }

    let level = config.gateway.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "gateway.log_level `{}` is not one of {}",
                config.gateway.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.paths.catalog.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "paths.catalog must not be empty".to_string(),
        });
    }

    for (key, value) in [
        ("paths.sysinternals", &config.paths.sysinternals),
        ("paths.x64", &config.paths.x64),
    ] {
        if let Some(dir) = value
            && dir.trim().is_empty()
        {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty when set"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Render collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("sysgate: config error: {error}");
    }
}
