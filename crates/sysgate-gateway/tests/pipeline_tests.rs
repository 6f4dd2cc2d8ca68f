// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end pipeline tests against real subprocesses.

use std::sync::{Arc, Mutex};

use sysgate_catalog::{Catalog, SchemaStore};
use sysgate_config::SysgateConfig;
use sysgate_core::{AuditEvent, AuditSink, StaticConfirmer, ToolCategory, ToolEntry};
use sysgate_gateway::Gateway;

#[derive(Debug, Default)]
struct MemorySink {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditSink for MemorySink {
    fn record(&self, event: &AuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn entry(name: &str, exe: &str, category: ToolCategory, destructive: bool) -> ToolEntry {
    ToolEntry {
        name: name.to_string(),
        exe: exe.to_string(),
        category,
        description: String::new(),
        tags: Vec::new(),
        destructive,
        safe_flags: Vec::new(),
    }
}

fn gateway(entries: Vec<ToolEntry>) -> Gateway {
    Gateway::new(
        SysgateConfig::default(),
        Catalog::from_entries(entries),
        SchemaStore::default(),
        Arc::new(StaticConfirmer::non_interactive()),
    )
}

/// `pslist -t` (sysinternals) receives the injected default flags ahead
/// of the caller's arguments. `/bin/echo` stands in for the tool and
/// prints the argv it was handed.
#[tokio::test]
async fn sysinternals_argv_is_prefixed_with_default_flags() {
    let gw = gateway(vec![entry(
        "pslist",
        "/bin/echo",
        ToolCategory::Sysinternals,
        false,
    )]);

    let wire = gw.invoke("pslist", "-t").await;
    assert_eq!(wire["success"], true);
    assert_eq!(wire["stdout"].as_str().unwrap().trim(), "-accepteula -nobanner -t");
}

/// Destructive tool, empty args, non-interactive, no override: blocked,
/// and the executable is never spawned.
#[tokio::test]
async fn sdelete_is_blocked_before_spawn() {
    let sink = Arc::new(MemorySink::default());
    let gw = gateway(vec![entry(
        "sdelete",
        "/bin/echo",
        ToolCategory::Sysinternals,
        true,
    )])
    .with_audit_sink(sink.clone());

    let wire = gw.invoke("sdelete", "").await;
    assert_eq!(wire["error"], "destructive_tool_blocked");
    assert!(wire["detail"].as_str().unwrap().contains("destructive"));
    // No audit events: the pipeline never reached execution.
    assert!(sink.events.lock().unwrap().is_empty());
}

/// A name absent from the catalog returns the tool-not-found shape.
#[tokio::test]
async fn unknown_tool_returns_not_found_shape() {
    let gw = gateway(vec![]);
    let wire = gw.invoke("strings", "-a").await;
    assert_eq!(wire, serde_json::json!({"error": "tool not found", "name": "strings"}));
}

/// Two invocations of a non-destructive tool are fully independent.
#[tokio::test]
async fn repeated_invocations_do_not_interfere() {
    let gw = gateway(vec![entry("echo", "/bin/echo", ToolCategory::Other, false)]);

    let first = gw.invoke("echo", "same args").await;
    let second = gw.invoke("echo", "same args").await;
    assert_eq!(first, second);
    assert_eq!(first["stdout"].as_str().unwrap().trim(), "same args");
}

/// Concurrent invocations each get their own subprocess and result.
#[tokio::test]
async fn concurrent_invocations_are_isolated() {
    let gw = Arc::new(gateway(vec![entry(
        "echo",
        "/bin/echo",
        ToolCategory::Other,
        false,
    )]));

    let mut handles = Vec::new();
    for i in 0..8 {
        let gw = Arc::clone(&gw);
        handles.push(tokio::spawn(
            async move { gw.invoke("echo", &format!("run-{i}")).await },
        ));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let wire = handle.await.unwrap();
        assert_eq!(wire["stdout"].as_str().unwrap().trim(), format!("run-{i}"));
    }
}

/// A tool slower than the budget is killed and reported as timed out.
#[tokio::test]
async fn slow_tool_times_out() {
    let mut config = SysgateConfig::default();
    config.gateway.timeout_secs = 1;
    let gw = Gateway::new(
        config,
        Catalog::from_entries(vec![entry("sleep", "/bin/sleep", ToolCategory::Other, false)]),
        SchemaStore::default(),
        Arc::new(StaticConfirmer::non_interactive()),
    );

    let wire = gw.invoke("sleep", "30").await;
    assert_eq!(wire["timeout"], true);
    assert_eq!(wire["exit_code"], serde_json::Value::Null);
    assert_eq!(wire["success"], false);
}

/// The audit sink sees `invoke` before `result` for an executed call.
#[tokio::test]
async fn audit_events_bracket_the_execution() {
    let sink = Arc::new(MemorySink::default());
    let gw = gateway(vec![entry("echo", "/bin/echo", ToolCategory::Other, false)])
        .with_audit_sink(sink.clone());

    let wire = gw.invoke("echo", "audited").await;
    assert_eq!(wire["success"], true);

    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    match (&events[0], &events[1]) {
        (
            AuditEvent::Invoke { tool, args, .. },
            AuditEvent::Outcome {
                tool: result_tool,
                exit_code,
                timeout,
            },
        ) => {
            assert_eq!(tool, "echo");
            assert_eq!(args, "audited");
            assert_eq!(result_tool, "echo");
            assert_eq!(*exit_code, Some(0));
            assert!(!timeout);
        }
        other => panic!("unexpected event order: {other:?}"),
    }
}

/// Interactive "yes" lets a destructive tool run; "no" blocks it.
#[tokio::test]
async fn interactive_confirmation_controls_destructive_run() {
    let make = |answer| {
        Gateway::new(
            SysgateConfig::default(),
            Catalog::from_entries(vec![entry(
                "pskill",
                "/bin/echo",
                ToolCategory::Sysinternals,
                true,
            )]),
            SchemaStore::default(),
            Arc::new(StaticConfirmer::answering(answer)),
        )
    };

    let wire = make(true).invoke("pskill", "victim").await;
    assert_eq!(wire["success"], true);

    let wire = make(false).invoke("pskill", "victim").await;
    assert_eq!(wire["error"], "destructive_tool_blocked");
    assert!(wire["detail"].as_str().unwrap().contains("declined"));
}

/// The schema layer rejects flags outside the allow-list before any
/// process is spawned.
#[tokio::test]
async fn schema_violation_short_circuits() {
    let schemas = SchemaStore::from_documents(vec![(
        "echo".to_string(),
        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "flags": {"type": "array", "items": {"enum": ["-n"]}},
                "positional": {"type": "array", "items": {"type": "string"}, "maxItems": 0},
            },
            "additionalProperties": false,
        }),
    )]);
    let gw = Gateway::new(
        SysgateConfig::default(),
        Catalog::from_entries(vec![entry("echo", "/bin/echo", ToolCategory::Other, false)]),
        schemas,
        Arc::new(StaticConfirmer::non_interactive()),
    );

    let wire = gw.invoke("echo", "-x").await;
    assert_eq!(wire["error"], "args_schema_violation");

    let wire = gw.invoke("echo", "positional").await;
    assert_eq!(wire["error"], "args_schema_violation");

    let wire = gw.invoke("echo", "-n").await;
    assert_eq!(wire["success"], true);
}

/// NirSoft capture: the report flag and file path are prepended, and
/// the (empty) report read is cleaned up silently.
#[tokio::test]
async fn nirsoft_invocation_gets_report_capture() {
    let gw = gateway(vec![entry(
        "bluescreenview",
        "/bin/echo",
        ToolCategory::Nirsoft,
        false,
    )]);

    let wire = gw.invoke("bluescreenview", "").await;
    assert_eq!(wire["success"], true);
    let stdout = wire["stdout"].as_str().unwrap();
    assert!(stdout.starts_with("/stext "), "stdout was: {stdout}");
    assert!(stdout.contains("sysgate-"));
}
