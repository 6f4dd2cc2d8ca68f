// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the gateway pipeline.
//!
//! Every stage of the pipeline fails closed into one of these variants.
//! The gateway boundary converts each variant into a stable JSON wire
//! shape via [`GatewayError::to_wire`]; errors never escape the boundary
//! as panics or process termination.

use thiserror::Error;

/// The primary error type for one pipeline pass.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Requested tool name is absent from the catalog.
    #[error("tool not found: {name}")]
    ToolNotFound { name: String },

    /// The sanitizer rejected the raw argument string.
    #[error("unsafe arguments: {detail}")]
    UnsafeArguments { detail: String },

    /// The schema validator rejected the tokenized arguments.
    #[error("argument schema violation: {detail}")]
    SchemaViolation { detail: String },

    /// The destructive-operation gate denied execution.
    #[error("destructive tool blocked: {detail}")]
    DestructiveBlocked { detail: String },

    /// Configuration errors (invalid TOML, bad values at load time).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors caught at the gateway boundary.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Serializes the error into the JSON shape returned to the caller.
    ///
    /// The `error` discriminator strings are part of the wire contract
    /// and must not change.
    pub fn to_wire(&self) -> serde_json::Value {
        match self {
            GatewayError::ToolNotFound { name } => serde_json::json!({
                "error": "tool not found",
                "name": name,
            }),
            GatewayError::UnsafeArguments { detail } => serde_json::json!({
                "error": "unsafe arguments",
                "detail": detail,
            }),
            GatewayError::SchemaViolation { detail } => serde_json::json!({
                "error": "args_schema_violation",
                "detail": detail,
            }),
            GatewayError::DestructiveBlocked { detail } => serde_json::json!({
                "error": "destructive_tool_blocked",
                "detail": detail,
            }),
            GatewayError::Config(detail) | GatewayError::Internal(detail) => serde_json::json!({
                "error": "internal error",
                "detail": detail,
            }),
        }
    }
}
