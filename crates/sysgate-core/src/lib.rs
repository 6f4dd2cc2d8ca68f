// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the sysgate tool gateway.
//!
//! This crate provides the shared data model (tool catalog entries,
//! sanitized arguments, execution results, audit events), the gateway
//! error taxonomy, and the capability traits implemented by the host
//! (confirmation prompting, audit recording).

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::GatewayError;
pub use traits::{AuditSink, Confirmer, StaticConfirmer};
pub use types::{AuditEvent, ExecutionResult, SanitizedArgs, ToolCategory, ToolEntry};
