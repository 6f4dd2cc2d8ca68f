// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory scanning: builds catalog entries from executables on disk.

use std::path::Path;

use sysgate_core::{ToolCategory, ToolEntry};
use walkdir::WalkDir;

/// Executable name fragments that mark a tool as destructive at scan
/// time. Matched case-insensitively against the file stem.
const DESTRUCTIVE_KEYWORDS: [&str; 6] =
    ["sdelete", "psexec", "pskill", "format", "cipher", "psshutdown"];

/// Recursively scans `root` for `*.exe` files and builds catalog entries.
///
/// Category is inferred from the path (a `sysinternals` or `nirsoft`
/// component anywhere in it); tools matching a destructive keyword are
/// flagged. Output is sorted by lowercased path so repeated scans of
/// the same tree produce identical records.
pub fn scan_directory(root: &Path) -> Vec<ToolEntry> {
    let mut found: Vec<(String, ToolEntry)> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
        })
        .map(|e| {
            let path = e.path();
            let rel = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .into_owned();
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let category = categorize(path);
            let entry = ToolEntry {
                name: name.clone(),
                exe: rel,
                category,
                description: format!("{category} utility {name}"),
                tags: vec![category.to_string()],
                destructive: is_destructive_name(&name),
                safe_flags: Vec::new(),
            };
            (path.to_string_lossy().to_lowercase(), entry)
        })
        .collect();

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found.into_iter().map(|(_, entry)| entry).collect()
}

/// Infers the category from path components.
///
/// The original tool trees shipped under `SystemInternals/` and
/// `NirSoft/` folders; both spellings of the Sysinternals folder are
/// accepted.
fn categorize(path: &Path) -> ToolCategory {
    let low = path.to_string_lossy().to_lowercase();
    if low.contains("sysinternals") || low.contains("systeminternals") {
        ToolCategory::Sysinternals
    } else if low.contains("nirsoft") {
        ToolCategory::Nirsoft
    } else {
        ToolCategory::Other
    }
}

/// True if the tool name contains any destructive keyword.
pub fn is_destructive_name(name: &str) -> bool {
    let low = name.to_lowercase();
    DESTRUCTIVE_KEYWORDS.iter().any(|k| low.contains(k))
}
