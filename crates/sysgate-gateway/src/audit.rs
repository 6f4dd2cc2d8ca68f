// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Audit event emission.
//!
//! The production sink forwards events as structured `tracing` records
//! under the `audit` target, ready for any external log pipeline.
//! Within one invocation the gateway records `invoke` strictly before
//! `result`; ordering across concurrent invocations is unspecified.

use sysgate_core::{AuditEvent, AuditSink};
use tracing::info;

/// Audit sink backed by the `tracing` pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &AuditEvent) {
        match event {
            AuditEvent::Invoke {
                tool,
                exe,
                args,
                category,
            } => {
                info!(target: "audit", %tool, %exe, %args, category = %category, "invoke");
            }
            AuditEvent::Outcome {
                tool,
                exit_code,
                timeout,
            } => {
                info!(target: "audit", %tool, exit_code = ?exit_code, timeout = *timeout, "result");
            }
        }
    }
}
