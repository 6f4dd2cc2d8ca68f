// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the sysgate gateway.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file lookup, and environment variable
//! overrides. The resulting [`SysgateConfig`] is immutable after load
//! and handed to the gateway at construction time; there is no ambient
//! process-wide configuration lookup.

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::SysgateConfig;
pub use validation::{ConfigError, render_errors};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<SysgateConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific file path and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<SysgateConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<SysgateConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(loaded: Result<SysgateConfig, figment::Error>) -> Result<SysgateConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Load(err.to_string())]),
    }
}
