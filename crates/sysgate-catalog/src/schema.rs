// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-tool argument schema store.
//!
//! Schemas live on disk as `<dir>/<tool>.schema.json` JSON Schema
//! documents validating a `{"flags": [...], "positional": [...]}`
//! payload. All files are read and compiled once at startup. A tool
//! without a schema file is unrestricted at this layer; a tool whose
//! schema file exists but cannot be compiled is denied on every
//! invocation until the file is fixed. Unreadable never means allow.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

/// Load-time state of one tool's schema.
pub enum SchemaState {
    /// Compiled and ready to validate.
    Compiled(jsonschema::Validator),
    /// Present on disk but unreadable or invalid; denies all args.
    Invalid(String),
}

impl std::fmt::Debug for SchemaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaState::Compiled(_) => f.write_str("Compiled"),
            SchemaState::Invalid(reason) => write!(f, "Invalid({reason})"),
        }
    }
}

/// All tool schemas, keyed by tool name. Immutable after load.
#[derive(Debug, Default)]
pub struct SchemaStore {
    schemas: HashMap<String, SchemaState>,
}

const SCHEMA_SUFFIX: &str = ".schema.json";

impl SchemaStore {
    /// Loads and compiles every `*.schema.json` under `dir`.
    ///
    /// A missing directory is the permissive empty store. Files that
    /// fail to parse or compile are retained as [`SchemaState::Invalid`]
    /// so the validator fails closed for those tools.
    pub fn load(dir: &Path) -> Self {
        let mut schemas = HashMap::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                return Self::default();
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(tool) = file_name.strip_suffix(SCHEMA_SUFFIX) else {
                continue;
            };

            let state = compile_file(&path);
            if let SchemaState::Invalid(reason) = &state {
                warn!(tool, %reason, "schema file unusable; invocations will be denied");
            }
            schemas.insert(tool.to_string(), state);
        }

        Self { schemas }
    }

    /// Builds a store from in-memory schema documents (for tests and
    /// embedding hosts that manage schemas themselves).
    pub fn from_documents(docs: Vec<(String, serde_json::Value)>) -> Self {
        let schemas = docs
            .into_iter()
            .map(|(tool, doc)| {
                let state = match jsonschema::validator_for(&doc) {
                    Ok(validator) => SchemaState::Compiled(validator),
                    Err(e) => SchemaState::Invalid(e.to_string()),
                };
                (tool, state)
            })
            .collect();
        Self { schemas }
    }

    /// Schema state for a tool, or `None` when no schema is declared.
    pub fn get(&self, tool: &str) -> Option<&SchemaState> {
        self.schemas.get(tool)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn compile_file(path: &Path) -> SchemaState {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => return SchemaState::Invalid(format!("read failed: {e}")),
    };
    let doc: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => return SchemaState::Invalid(format!("parse failed: {e}")),
    };
    match jsonschema::validator_for(&doc) {
        Ok(validator) => SchemaState::Compiled(validator),
        Err(e) => SchemaState::Invalid(format!("compile failed: {e}")),
    }
}
