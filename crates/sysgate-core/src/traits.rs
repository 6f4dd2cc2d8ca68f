// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits implemented by the embedding host.
//!
//! Confirmation and audit recording are injected into the gateway at
//! construction time so that transports and tests can substitute their
//! own implementations (a deterministic responder instead of terminal
//! I/O, an in-memory sink instead of the log pipeline).

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::types::AuditEvent;

/// Obtains explicit yes/no confirmation for destructive invocations.
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// True if this confirmer can actually reach a human.
    ///
    /// Non-interactive contexts must return false so the gate blocks
    /// instead of hanging on a prompt nobody will answer.
    fn is_interactive(&self) -> bool;

    /// Presents the prompt and returns the answer.
    ///
    /// Only called when [`is_interactive`](Confirmer::is_interactive)
    /// is true. A failed prompt is an error, which the gate treats as
    /// a denial.
    async fn confirm(&self, prompt: &str) -> Result<bool, GatewayError>;
}

/// Records audit events.
///
/// Implementations must tolerate concurrent calls; the gateway only
/// guarantees that one invocation's `invoke` event is recorded before
/// its `result` event.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &AuditEvent);
}

/// A confirmer with a fixed interactivity and answer.
///
/// Used by non-interactive embeddings (always deny) and by tests
/// (deterministic yes/no responder).
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmer {
    pub interactive: bool,
    pub answer: bool,
}

impl StaticConfirmer {
    /// A confirmer for contexts with no human attached.
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            answer: false,
        }
    }

    /// An interactive confirmer that always gives `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            interactive: true,
            answer,
        }
    }
}

#[async_trait]
impl Confirmer for StaticConfirmer {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    async fn confirm(&self, _prompt: &str) -> Result<bool, GatewayError> {
        Ok(self.answer)
    }
}
