// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal-backed confirmation provider.

use std::io::{IsTerminal, Write};

use async_trait::async_trait;
use sysgate_core::{Confirmer, GatewayError};

/// Asks the user on the controlling terminal.
///
/// Interactive only when stdin is a real terminal; a piped or daemon
/// context reports non-interactive so the gate blocks instead of
/// waiting on input nobody will type.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmer;

#[async_trait]
impl Confirmer for TerminalConfirmer {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    async fn confirm(&self, prompt: &str) -> Result<bool, GatewayError> {
        let prompt = prompt.to_string();
        // Blocking terminal read; kept off the async workers.
        tokio::task::spawn_blocking(move || {
            let mut stderr = std::io::stderr();
            stderr
                .write_all(prompt.as_bytes())
                .and_then(|_| stderr.flush())
                .map_err(|e| GatewayError::Internal(format!("prompt write failed: {e}")))?;

            let mut answer = String::new();
            std::io::stdin()
                .read_line(&mut answer)
                .map_err(|e| GatewayError::Internal(format!("prompt read failed: {e}")))?;

            Ok(answer.trim().eq_ignore_ascii_case("yes"))
        })
        .await
        .map_err(|e| GatewayError::Internal(format!("confirmation task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_matching_is_trimmed_and_case_insensitive() {
        // The acceptance rule lives inline in `confirm`; mirror it here
        // so a change to one side breaks the test.
        for answer in ["yes", "YES", "  Yes \n"] {
            assert!(answer.trim().eq_ignore_ascii_case("yes"));
        }
        for answer in ["y", "no", "", "yes please"] {
            assert!(!answer.trim().eq_ignore_ascii_case("yes"));
        }
    }
}
