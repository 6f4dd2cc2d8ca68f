// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory tool catalog.

use std::collections::HashMap;
use std::path::Path;

use sysgate_core::{GatewayError, ToolEntry};
use tracing::warn;

use crate::scan::scan_directory;

/// Registry of invocable tools, indexed by unique name.
///
/// Read-only after load; safe to share across concurrent invocations
/// without locking.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, ToolEntry>,
}

impl Catalog {
    /// Builds a catalog from a sequence of entries.
    ///
    /// Names must be unique; on a duplicate the first entry wins and a
    /// warning is logged.
    pub fn from_entries(entries: Vec<ToolEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if map.contains_key(&entry.name) {
                warn!(tool = %entry.name, "duplicate catalog entry ignored");
                continue;
            }
            map.insert(entry.name.clone(), entry);
        }
        Self { entries: map }
    }

    /// Looks up a tool by name. O(1).
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.get(name)
    }

    /// All entries sorted by name, for listings and registrations.
    pub fn list(&self) -> Vec<&ToolEntry> {
        let mut entries: Vec<&ToolEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads catalog entries from `path`.
///
/// A directory is scanned recursively for executables; a file is parsed
/// as a persisted JSON record. A missing path yields an empty catalog
/// with a warning rather than an error, so a bare deployment still
/// starts (with nothing to invoke).
pub fn load_catalog(path: &Path) -> Result<Catalog, GatewayError> {
    if path.is_dir() {
        return Ok(Catalog::from_entries(scan_directory(path)));
    }

    if path.is_file() {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::Config(format!("failed to read catalog {}: {e}", path.display()))
        })?;
        let entries: Vec<ToolEntry> = serde_json::from_str(&raw).map_err(|e| {
            GatewayError::Config(format!("failed to parse catalog {}: {e}", path.display()))
        })?;
        return Ok(Catalog::from_entries(entries));
    }

    warn!(path = %path.display(), "catalog source not found; no tools registered");
    Ok(Catalog::default())
}
