// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport registration table.
//!
//! Builds one plain-data descriptor per catalog tool — name,
//! description, JSON parameters schema — plus an async handler closure
//! bound to the gateway. A transport layer (MCP server, HTTP, REPL)
//! consumes the table as data; there is no annotation-based discovery.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::gateway::Gateway;

/// Async handler for one tool: raw argument string in, wire JSON out.
pub type ToolHandler = Arc<dyn Fn(String) -> BoxFuture<'static, serde_json::Value> + Send + Sync>;

/// One tool as seen by a transport layer.
pub struct ToolRegistration {
    pub name: String,
    pub description: String,
    /// JSON Schema for the invocation parameters: a single optional
    /// `args` string.
    pub parameters: serde_json::Value,
    pub handler: ToolHandler,
}

/// Builds the registration table from the gateway's catalog, sorted by
/// tool name.
pub fn registrations(gateway: Arc<Gateway>) -> Vec<ToolRegistration> {
    gateway
        .catalog()
        .list()
        .into_iter()
        .map(|entry| {
            let name = entry.name.clone();
            let description = if entry.description.is_empty() {
                format!("{} tool: {}", entry.category, entry.exe)
            } else {
                entry.description.clone()
            };

            let handler: ToolHandler = {
                let gateway = Arc::clone(&gateway);
                let name = name.clone();
                Arc::new(move |args: String| {
                    let gateway = Arc::clone(&gateway);
                    let name = name.clone();
                    Box::pin(async move { gateway.invoke(&name, &args).await })
                })
            };

            ToolRegistration {
                name,
                description,
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "args": {
                            "type": "string",
                            "description": "Raw argument string for the tool"
                        }
                    },
                    "required": []
                }),
                handler,
            }
        })
        .collect()
}
