// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the sysgate gateway.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level sysgate configuration.
///
/// Loaded from `sysgate.toml` with `SYSGATE_` environment variable
/// overrides. Every section is optional and defaults to safe values:
/// destructive tools stay gated unless explicitly allowed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SysgateConfig {
    /// Gateway pipeline settings.
    #[serde(default)]
    pub gateway: GatewaySection,

    /// Filesystem locations for executables, catalog, and schemas.
    #[serde(default)]
    pub paths: PathsSection,
}

/// Gateway pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Wall-clock budget for one subprocess, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Global override letting destructive tools run without
    /// per-invocation confirmation.
    #[serde(default)]
    pub allow_destructive: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            timeout_secs: default_timeout_secs(),
            allow_destructive: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Filesystem locations read at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Base directory for `sysinternals` category executables.
    /// `None` means catalog paths are used as-is.
    #[serde(default)]
    pub sysinternals: Option<String>,

    /// Base directory for all other category executables.
    #[serde(default)]
    pub x64: Option<String>,

    /// Catalog source: a persisted JSON record, or a directory to scan.
    #[serde(default = "default_catalog_path")]
    pub catalog: String,

    /// Directory holding per-tool `*.schema.json` files.
    #[serde(default = "default_schemas_path")]
    pub schemas: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            sysinternals: None,
            x64: None,
            catalog: default_catalog_path(),
            schemas: default_schemas_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "binaries.json".to_string()
}

fn default_schemas_path() -> String {
    "schemas".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fail_closed() {
        let config = SysgateConfig::default();
        assert!(!config.gateway.allow_destructive);
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.gateway.log_level, "info");
    }

    #[test]
    fn path_defaults_match_catalog_conventions() {
        let paths = PathsSection::default();
        assert_eq!(paths.catalog, "binaries.json");
        assert_eq!(paths.schemas, "schemas");
        assert!(paths.sysinternals.is_none());
    }
}
