// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural schema validation of sanitized arguments.
//!
//! This is an allow-list, not semantic validation: a schema constrains
//! which flags may appear and whether positional arguments are
//! permitted, and accepts any combination of allowed tokens.

use sysgate_catalog::{SchemaState, SchemaStore};
use sysgate_core::{GatewayError, SanitizedArgs, ToolEntry};

/// Checks sanitized tokens against the tool's declared schema.
///
/// Resolution order:
/// 1. A compiled schema file validates the `{"flags", "positional"}`
///    payload.
/// 2. An invalid schema file denies everything for that tool.
/// 3. No schema file, but non-empty catalog `safe_flags`: every flag
///    token must appear in the allow-list.
/// 4. Neither: permissive no-op.
pub fn validate(
    entry: &ToolEntry,
    args: &SanitizedArgs,
    store: &SchemaStore,
) -> Result<(), GatewayError> {
    match store.get(&entry.name) {
        Some(SchemaState::Compiled(validator)) => {
            let payload = serde_json::json!({
                "flags": args.flags(),
                "positional": args.positional(),
            });
            validator
                .validate(&payload)
                .map_err(|e| GatewayError::SchemaViolation {
                    detail: e.to_string(),
                })
        }
        Some(SchemaState::Invalid(reason)) => Err(GatewayError::SchemaViolation {
            detail: format!("schema for `{}` is unreadable: {reason}", entry.name),
        }),
        None => validate_safe_flags(entry, args),
    }
}

fn validate_safe_flags(entry: &ToolEntry, args: &SanitizedArgs) -> Result<(), GatewayError> {
    if entry.safe_flags.is_empty() {
        return Ok(());
    }
    for flag in args.flags() {
        if !entry.safe_flags.iter().any(|allowed| allowed == flag) {
            return Err(GatewayError::SchemaViolation {
                detail: format!("flag `{flag}` is not in the allow-list for `{}`", entry.name),
            });
        }
    }
    Ok(())
}
