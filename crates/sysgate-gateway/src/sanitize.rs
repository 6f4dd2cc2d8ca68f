// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument sanitization: rejects shell-metacharacter injection, then
//! tokenizes with POSIX-shell quoting rules.
//!
//! The executor never goes through a shell, so the forbidden-character
//! check is defense in depth against any later layer that might
//! re-parse the string.

use std::sync::LazyLock;

use regex::Regex;
use sysgate_core::{GatewayError, SanitizedArgs};

/// Characters that enable command chaining or substitution in a shell.
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;&|<>`$]").unwrap());

/// Turns a raw argument string into a token list.
///
/// Empty (or all-whitespace) input is an empty token list, not an
/// error. Any forbidden character fails the whole string; so does
/// quoting that shlex cannot parse, such as an unbalanced quote.
pub fn sanitize(raw: &str) -> Result<SanitizedArgs, GatewayError> {
    if raw.trim().is_empty() {
        return Ok(SanitizedArgs::empty());
    }

    if UNSAFE_CHARS.is_match(raw) {
        return Err(GatewayError::UnsafeArguments {
            detail: "unsafe characters detected in args".to_string(),
        });
    }

    let tokens = shlex::split(raw).ok_or_else(|| GatewayError::UnsafeArguments {
        detail: "arguments could not be tokenized (unbalanced quoting)".to_string(),
    })?;

    Ok(SanitizedArgs::new(tokens))
}
