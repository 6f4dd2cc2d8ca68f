// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destructive-operation gate.
//!
//! The single choke point that decides whether a destructive tool may
//! run, regardless of which path triggered the invocation. Destructive
//! tools never run silently from an automated caller.

use std::path::Path;

use sysgate_core::{Confirmer, ToolEntry};
use tracing::warn;

/// Tool names that are always treated as destructive, independent of
/// the catalog flag. Defense against catalog tampering or omission.
pub const DESTRUCTIVE_NAMES: [&str; 10] = [
    "sdelete",
    "sdelete64",
    "psexec",
    "psexec64",
    "pskill",
    "pskill64",
    "psservice",
    "psshutdown",
    "format",
    "cipher",
];

/// Terminal outcome of the gate for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Blocked { detail: String },
}

/// True if the entry or the resolved executable looks destructive.
///
/// Either condition triggers gating: the catalog flag, a destructive
/// keyword inside the executable's file stem, or the tool name itself
/// being in the fixed set. Deliberately conservative; a coincidental
/// keyword match gates a harmless tool rather than risking the inverse.
pub fn is_destructive(entry: &ToolEntry, exe_path: &Path) -> bool {
    if entry.destructive {
        return true;
    }
    let stem = exe_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let name = entry.name.to_lowercase();
    DESTRUCTIVE_NAMES
        .iter()
        .any(|d| stem.contains(d) || name == *d)
}

/// Runs the confirmation state machine for one invocation.
///
/// Proceeds when the tool is not destructive, when the global
/// `allow_destructive` override is set, or when the raw argument string
/// carries an explicit confirmation token. Otherwise an interactive
/// confirmer is asked once; anything but "yes" blocks. Non-interactive
/// contexts and failed prompts block — the gate fails closed.
pub async fn check(
    entry: &ToolEntry,
    exe_path: &Path,
    raw_args: &str,
    allow_destructive: bool,
    confirmer: &dyn Confirmer,
) -> GateDecision {
    if !is_destructive(entry, exe_path) {
        return GateDecision::Proceed;
    }

    if allow_destructive {
        return GateDecision::Proceed;
    }

    if raw_args.contains("--confirm") || raw_args.contains("confirm=yes") {
        return GateDecision::Proceed;
    }

    if confirmer.is_interactive() {
        let prompt = format!(
            "Tool '{}' appears destructive. Type 'yes' to confirm and run: ",
            entry.name
        );
        return match confirmer.confirm(&prompt).await {
            Ok(true) => GateDecision::Proceed,
            Ok(false) => {
                warn!(tool = %entry.name, "user declined destructive tool");
                GateDecision::Blocked {
                    detail: "User declined confirmation.".to_string(),
                }
            }
            Err(_) => GateDecision::Blocked {
                detail: "Unable to prompt for confirmation. Use --confirm or set \
                         allow_destructive=true."
                    .to_string(),
            },
        };
    }

    warn!(tool = %entry.name, "blocked destructive tool invocation (non-interactive)");
    GateDecision::Blocked {
        detail: "Tool is destructive. Run with `--confirm` or enable \
                 allow_destructive=true in sysgate.toml."
            .to_string(),
    }
}
