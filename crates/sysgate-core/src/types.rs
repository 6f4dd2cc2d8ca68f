// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the gateway pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Category of a catalog tool.
///
/// The category determines default-flag injection and output-capture
/// strategy at execution time, and which configured base directory the
/// executable path is resolved against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Sysinternals,
    Nirsoft,
    #[default]
    Other,
}

/// One invocable tool in the catalog.
///
/// Entries are produced externally (persisted JSON record or directory
/// scan) and are immutable once loaded; the gateway only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Unique name, the catalog lookup key.
    pub name: String,

    /// Executable path, usually relative to a category base directory.
    pub exe: String,

    /// Category driving execution policy and path resolution.
    #[serde(default)]
    pub category: ToolCategory,

    /// Human-readable description for listings and registrations.
    #[serde(default)]
    pub description: String,

    /// Free-form tags carried through from the catalog source.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Marks the tool as destructive. Irreversible for the entry's
    /// lifetime within a process run.
    #[serde(default)]
    pub destructive: bool,

    /// Permitted flag tokens. Empty means no flag restriction at the
    /// catalog layer.
    #[serde(default)]
    pub safe_flags: Vec<String>,
}

/// Tokenized arguments produced by the sanitizer.
///
/// Tokens are partitioned on demand into flags (leading `-` or `/`) and
/// positional arguments; order within each partition follows the
/// original string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedArgs {
    tokens: Vec<String>,
}

impl SanitizedArgs {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// All tokens in original order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if the token is a flag (`-` or `/` prefix, Windows tools use both).
    pub fn is_flag(token: &str) -> bool {
        token.starts_with('-') || token.starts_with('/')
    }

    /// Flag tokens, in original order.
    pub fn flags(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| Self::is_flag(t))
            .collect()
    }

    /// Positional tokens, in original order.
    pub fn positional(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !Self::is_flag(t))
            .collect()
    }
}

/// Outcome of one bounded process run.
///
/// All ordinary failure modes are encoded here rather than raised: a
/// missing executable, a timeout, and a non-zero exit are all results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Exit code, or `None` if the process never produced one (spawn
    /// failure or timeout).
    pub exit_code: Option<i32>,

    /// Captured standard output, lossily decoded.
    pub stdout: String,

    /// Captured standard error, lossily decoded.
    pub stderr: String,

    /// True if the process exceeded its wall-clock budget.
    #[serde(rename = "timeout")]
    pub timed_out: bool,

    /// True iff the process exited with code 0.
    pub success: bool,

    /// Discriminator for spawn-level failures (currently `not_found`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Result for a process that ran to completion.
    pub fn completed(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            timed_out: false,
            success: exit_code == Some(0),
            error: None,
        }
    }

    /// Result for a process killed at the timeout boundary.
    pub fn timed_out() -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: "Timed out".to_string(),
            timed_out: true,
            success: false,
            error: None,
        }
    }

    /// Result for an executable that could not be located or spawned.
    pub fn spawn_failed(detail: impl Into<String>) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: detail.into(),
            timed_out: false,
            success: false,
            error: Some("not_found".to_string()),
        }
    }
}

/// Append-only audit record emitted by the gateway.
///
/// Exactly two events bracket every executed invocation: `invoke`
/// before the process starts and `result` after it finishes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum AuditEvent {
    /// Recorded immediately before the executor runs.
    Invoke {
        tool: String,
        exe: String,
        args: String,
        category: ToolCategory,
    },
    /// Recorded once the execution outcome is known.
    #[serde(rename = "result")]
    Outcome {
        tool: String,
        exit_code: Option<i32>,
        timeout: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_round_trips_through_display() {
        for cat in [
            ToolCategory::Sysinternals,
            ToolCategory::Nirsoft,
            ToolCategory::Other,
        ] {
            let s = cat.to_string();
            assert_eq!(ToolCategory::from_str(&s).unwrap(), cat);
        }
        assert_eq!(ToolCategory::Sysinternals.to_string(), "sysinternals");
    }

    #[test]
    fn tool_entry_deserializes_with_defaults() {
        let entry: ToolEntry =
            serde_json::from_str(r#"{"name": "pslist", "exe": "pslist.exe"}"#).unwrap();
        assert_eq!(entry.name, "pslist");
        assert_eq!(entry.category, ToolCategory::Other);
        assert!(!entry.destructive);
        assert!(entry.safe_flags.is_empty());
    }

    #[test]
    fn sanitized_args_partition_preserves_order() {
        let args = SanitizedArgs::new(
            ["-t", "proc", "/stext", "out.txt", "--wide"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(args.flags(), vec!["-t", "/stext", "--wide"]);
        assert_eq!(args.positional(), vec!["proc", "out.txt"]);
    }

    #[test]
    fn execution_result_success_tracks_zero_exit() {
        assert!(ExecutionResult::completed(Some(0), String::new(), String::new()).success);
        assert!(!ExecutionResult::completed(Some(2), String::new(), String::new()).success);
        assert!(!ExecutionResult::completed(None, String::new(), String::new()).success);
    }

    #[test]
    fn execution_result_serializes_wire_field_names() {
        let res = ExecutionResult::timed_out();
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["timeout"], true);
        assert_eq!(json["exit_code"], serde_json::Value::Null);
        assert_eq!(json["success"], false);
        // `error` is omitted when absent.
        assert!(json.get("error").is_none());

        let missing = ExecutionResult::spawn_failed("no such file");
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(json["error"], "not_found");
    }

    #[test]
    fn audit_event_phase_tags() {
        let invoke = AuditEvent::Invoke {
            tool: "pslist".into(),
            exe: "pslist.exe".into(),
            args: "-t".into(),
            category: ToolCategory::Sysinternals,
        };
        let json = serde_json::to_value(&invoke).unwrap();
        assert_eq!(json["phase"], "invoke");

        let outcome = AuditEvent::Outcome {
            tool: "pslist".into(),
            exit_code: Some(0),
            timeout: false,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["phase"], "result");
    }
}
