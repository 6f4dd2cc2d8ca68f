// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category-specific execution policy.
//!
//! Sysinternals tools get license/banner suppression flags so their
//! output stays parseable; NirSoft tools write their report to a
//! temporary file that is read back and appended to stdout. The
//! tempfile is removed on every exit path, including a failed read.

use sysgate_core::{ExecutionResult, GatewayError, ToolCategory};
use tempfile::NamedTempFile;

/// Flags prepended to every Sysinternals invocation.
const SYSINTERNALS_FLAGS: [&str; 2] = ["-accepteula", "-nobanner"];

/// NirSoft flags that already direct output to a structured report;
/// when the caller passes one, the gateway stays out of the way.
const NIRSOFT_REPORT_FLAGS: [&str; 2] = ["/stext", "/sxml"];

/// Argument vector plus any report capture prepared for one execution.
pub struct PreparedArgv {
    pub argv: Vec<String>,
    /// Present only for the NirSoft capture path. Dropping it deletes
    /// the file.
    pub report: Option<NamedTempFile>,
}

/// Applies the category policy to the sanitized token list.
pub fn prepare(category: ToolCategory, tokens: Vec<String>) -> Result<PreparedArgv, GatewayError> {
    match category {
        ToolCategory::Sysinternals => {
            let mut argv: Vec<String> =
                SYSINTERNALS_FLAGS.iter().map(|s| s.to_string()).collect();
            argv.extend(tokens);
            Ok(PreparedArgv { argv, report: None })
        }
        ToolCategory::Nirsoft => {
            if tokens
                .iter()
                .any(|t| NIRSOFT_REPORT_FLAGS.contains(&t.as_str()))
            {
                return Ok(PreparedArgv {
                    argv: tokens,
                    report: None,
                });
            }

            let report = tempfile::Builder::new()
                .prefix("sysgate-")
                .suffix(".txt")
                .tempfile()
                .map_err(|e| {
                    GatewayError::Internal(format!("failed to create report file: {e}"))
                })?;

            let mut argv = vec![
                "/stext".to_string(),
                report.path().to_string_lossy().into_owned(),
            ];
            argv.extend(tokens);
            Ok(PreparedArgv {
                argv,
                report: Some(report),
            })
        }
        ToolCategory::Other => Ok(PreparedArgv {
            argv: tokens,
            report: None,
        }),
    }
}

/// Reads a NirSoft report back and appends it to the captured stdout.
///
/// A missing or unreadable report is ignored; the tempfile is deleted
/// when `report` drops at the end of this function either way.
pub async fn collect_report(result: &mut ExecutionResult, report: NamedTempFile) {
    if let Ok(bytes) = tokio::fs::read(report.path()).await {
        result
            .stdout
            .push_str(&String::from_utf8_lossy(&bytes));
    }
}
