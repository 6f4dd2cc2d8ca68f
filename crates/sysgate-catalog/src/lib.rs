// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool catalog and schema store for the sysgate gateway.
//!
//! The [`Catalog`] is the registry of invocable tools, loaded once from
//! a persisted JSON record or a recursive directory scan and immutable
//! afterwards. The [`SchemaStore`] holds per-tool structural argument
//! schemas compiled at load; absence of a schema is a valid, permissive
//! state.

pub mod catalog;
pub mod scan;
pub mod schema;

pub use catalog::{Catalog, load_catalog};
pub use scan::scan_directory;
pub use schema::{SchemaState, SchemaStore};
