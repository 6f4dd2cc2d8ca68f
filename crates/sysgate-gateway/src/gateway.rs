// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway orchestrator: one request-to-response pipeline per call.

use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use sysgate_catalog::{Catalog, SchemaStore};
use sysgate_config::SysgateConfig;
use sysgate_core::{
    AuditEvent, AuditSink, Confirmer, ExecutionResult, GatewayError, ToolCategory, ToolEntry,
};
use tracing::debug;

use crate::gate::{self, GateDecision};
use crate::policy;
use crate::sanitize::sanitize;
use crate::validate::validate;
use crate::{audit::TracingAuditSink, executor};

/// The execution gateway.
///
/// Holds the immutable-after-load catalog, schema store, and
/// configuration plus the injected confirmation and audit capabilities.
/// One instance serves all invocations; each call is an independent
/// unit of work with no shared mutable state.
pub struct Gateway {
    config: SysgateConfig,
    catalog: Catalog,
    schemas: SchemaStore,
    confirmer: Arc<dyn Confirmer>,
    audit: Arc<dyn AuditSink>,
}

impl Gateway {
    pub fn new(
        config: SysgateConfig,
        catalog: Catalog,
        schemas: SchemaStore,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            config,
            catalog,
            schemas,
            confirmer,
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Replaces the audit sink (tests, custom collectors).
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs one full pipeline pass and returns the JSON wire object.
    ///
    /// This is the outermost boundary: pipeline failures become tagged
    /// error objects and even a panic inside the pipeline is converted
    /// to an `internal error` result rather than taking the process
    /// down.
    pub async fn invoke(&self, name: &str, raw_args: &str) -> serde_json::Value {
        let outcome = AssertUnwindSafe(self.invoke_inner(name, raw_args))
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(result)) => serde_json::to_value(&result).unwrap_or_else(|e| {
                GatewayError::Internal(format!("result serialization failed: {e}")).to_wire()
            }),
            Ok(Err(err)) => {
                debug!(tool = name, error = %err, "invocation refused");
                err.to_wire()
            }
            Err(_) => {
                GatewayError::Internal("panic during tool invocation".to_string()).to_wire()
            }
        }
    }

    async fn invoke_inner(
        &self,
        name: &str,
        raw_args: &str,
    ) -> Result<ExecutionResult, GatewayError> {
        let entry = self
            .catalog
            .get(name)
            .ok_or_else(|| GatewayError::ToolNotFound {
                name: name.to_string(),
            })?;

        let exe_path = self.resolve_exe(entry);

        let args = sanitize(raw_args)?;
        validate(entry, &args, &self.schemas)?;

        match gate::check(
            entry,
            &exe_path,
            raw_args,
            self.config.gateway.allow_destructive,
            self.confirmer.as_ref(),
        )
        .await
        {
            GateDecision::Proceed => {}
            GateDecision::Blocked { detail } => {
                return Err(GatewayError::DestructiveBlocked { detail });
            }
        }

        self.audit.record(&AuditEvent::Invoke {
            tool: entry.name.clone(),
            exe: exe_path.to_string_lossy().into_owned(),
            args: raw_args.to_string(),
            category: entry.category,
        });

        let prepared = policy::prepare(entry.category, args.into_tokens())?;
        let timeout = Duration::from_secs(self.config.gateway.timeout_secs);
        let mut result = executor::execute(&exe_path, &prepared.argv, timeout).await;

        if let Some(report) = prepared.report {
            policy::collect_report(&mut result, report).await;
        }

        self.audit.record(&AuditEvent::Outcome {
            tool: entry.name.clone(),
            exit_code: result.exit_code,
            timeout: result.timed_out,
        });

        Ok(result)
    }

    /// Joins the category base directory with the entry's relative
    /// path when one is configured, else uses the entry path as-is.
    fn resolve_exe(&self, entry: &ToolEntry) -> PathBuf {
        let base = match entry.category {
            ToolCategory::Sysinternals => self.config.paths.sysinternals.as_deref(),
            _ => self.config.paths.x64.as_deref(),
        };
        match base {
            Some(base) => PathBuf::from(base).join(&entry.exe),
            None => PathBuf::from(&entry.exe),
        }
    }
}
