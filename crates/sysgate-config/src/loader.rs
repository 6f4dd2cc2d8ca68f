// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports `./sysgate.toml` > `~/.config/sysgate/sysgate.toml` with
//! environment variable overrides via `SYSGATE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SysgateConfig;

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `~/.config/sysgate/sysgate.toml` (user XDG config)
/// 3. `./sysgate.toml` (local directory)
/// 4. `SYSGATE_*` environment variables
pub fn load_config() -> Result<SysgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SysgateConfig::default()))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("sysgate/sysgate.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("sysgate.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SysgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SysgateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SysgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SysgateConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SYSGATE_GATEWAY_ALLOW_DESTRUCTIVE`
/// must map to `gateway.allow_destructive`, not `gateway.allow.destructive`.
fn env_provider() -> Env {
    Env::prefixed("SYSGATE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let mapped = key
            .as_str()
            .replacen("gateway_", "gateway.", 1)
            .replacen("paths_", "paths.", 1);
        mapped.into()
    })
}
