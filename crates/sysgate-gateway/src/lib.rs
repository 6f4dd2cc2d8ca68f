// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sysgate execution gateway.
//!
//! Composes one request-to-response pipeline per tool call: catalog
//! lookup, argument sanitization, schema validation, destructive-
//! operation gating, category execution policy, bounded subprocess
//! execution, and audit emission. Every stage fails closed; every
//! failure is a tagged result, never a crash.

pub mod audit;
pub mod executor;
pub mod gate;
pub mod gateway;
pub mod policy;
pub mod registration;
pub mod sanitize;
pub mod validate;

pub use audit::TracingAuditSink;
pub use gate::GateDecision;
pub use gateway::Gateway;
pub use registration::{ToolHandler, ToolRegistration, registrations};
pub use sanitize::sanitize;
