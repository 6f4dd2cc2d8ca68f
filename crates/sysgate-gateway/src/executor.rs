// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded subprocess execution.
//!
//! Spawns the resolved executable with an argument vector (never a
//! shell) and a minimal environment, captures both output streams, and
//! enforces a wall-clock timeout. All failure modes are encoded in the
//! returned [`ExecutionResult`]; this module never errors for an
//! ordinary process failure.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use sysgate_core::ExecutionResult;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs `exe` with `argv`, bounded by `timeout`.
///
/// On timeout the child is killed and reaped before returning; there is
/// no detached-process state. A spawn failure (missing executable,
/// permission denied) yields a `not_found` result with the OS error in
/// `stderr`.
pub async fn execute(exe: &Path, argv: &[String], timeout: Duration) -> ExecutionResult {
    let mut cmd = Command::new(exe);
    cmd.args(argv)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_clear()
        .kill_on_drop(true);

    // Minimal environment: only the search path survives.
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            debug!(exe = %exe.display(), error = %e, "failed to spawn");
            return ExecutionResult::spawn_failed(e.to_string());
        }
    };

    let stdout_task = drain_task(child.stdout.take());
    let stderr_task = drain_task(child.stderr.take());

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => {
            let stdout = collect(stdout_task).await;
            let stderr = collect(stderr_task).await;
            ExecutionResult::completed(status.code(), stdout, stderr)
        }
        Ok(Err(e)) => {
            kill_and_reap(&mut child).await;
            ExecutionResult::completed(None, String::new(), format!("wait failed: {e}"))
        }
        Err(_) => {
            kill_and_reap(&mut child).await;
            ExecutionResult::timed_out()
        }
    }
}

/// Reads one output pipe to the end on its own task so both streams
/// drain concurrently and a full pipe cannot deadlock the child.
fn drain_task(
    pipe: Option<impl AsyncReadExt + Unpin + Send + 'static>,
) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut pipe| {
        tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf).await;
            buf
        })
    })
}

async fn collect(task: Option<JoinHandle<Vec<u8>>>) -> String {
    match task {
        Some(task) => String::from_utf8_lossy(&task.await.unwrap_or_default()).into_owned(),
        None => String::new(),
    }
}

/// `Child::kill` both signals and awaits the child, so no zombie is
/// left behind; a failure here means the child already exited.
async fn kill_and_reap(child: &mut Child) {
    let _ = child.kill().await;
}
